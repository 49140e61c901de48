use moon::*;
use shared::BoardConfig;
use std::path::Path;

const BOARD_TOML: &str = include_str!("../../frontend/board.toml");
const PUBLIC_URL_PREFIX: &str = "/_api/public/";

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Corkboard")
        .index_by_robots(false)
}

// The board never talks to the server; everything it needs is static.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

/// Warn about library entries whose image the server would 404 on.
fn check_library_assets() {
    let config = match BoardConfig::from_toml_str(BOARD_TOML) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("board.toml: {error}");
            return;
        }
    };
    for sticker in &config.library {
        let Some(relative) = sticker.src.strip_prefix(PUBLIC_URL_PREFIX) else {
            continue;
        };
        let path = Path::new("public").join(relative);
        if !path.is_file() {
            eprintln!("Library sticker '{}' is missing: {}", sticker.name, path.display());
        }
    }
    println!("Sticker library: {} entries", config.library.len());
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        println!("BACKEND PANIC: {:?}", panic_info);
    }));

    check_library_assets();

    start(frontend, up_msg_handler, |_| {}).await
}
