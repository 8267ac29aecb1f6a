// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match Flags::from_args(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            log::error!("{err}");
            eprintln!(
                "usage: iced_lightbox [--config FILE] [--loop] [--fullscreen] \
                 [--size default|contain|cover|native] IMAGE..."
            );
            std::process::exit(2);
        }
    };

    app::run(flags)
}
