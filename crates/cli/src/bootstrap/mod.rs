mod interface;
mod logging;

pub use interface::{detect_interface_addr, interface_index};
pub use logging::init_logging;

use ferrous_mdns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}
