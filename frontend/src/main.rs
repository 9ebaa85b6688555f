use bimarz_site::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting site");
    yew::Renderer::<App>::new().render();
}
