use wiresphere::{Options, Viewer};

fn main() {
    env_logger::init();

    let mut builder = Viewer::builder();
    if let Some(preset) = std::env::args().nth(1) {
        match Options::load(std::path::Path::new(&preset)) {
            Ok(options) => builder = builder.with_options(options),
            Err(e) => {
                log::error!("failed to load options preset {preset}: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
