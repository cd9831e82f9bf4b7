// src/config/mod.rs

pub mod consts;
pub mod options;

use self::consts::{DEFAULT_PORT, PORT_ENV};

/// Listen port for the embedding dashboard host: `PORT` env override,
/// default 10000. The crate itself runs no server; the host reads this.
pub fn listen_port() -> u16 {
    port_from(std::env::var(PORT_ENV).ok().as_deref())
}

fn port_from(val: Option<&str>) -> u16 {
    val.and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_and_default() {
        assert_eq!(port_from(None), DEFAULT_PORT);
        assert_eq!(port_from(Some("8050")), 8050);
        assert_eq!(port_from(Some(" 9000 ")), 9000);
        // junk falls back
        assert_eq!(port_from(Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(port_from(Some("")), DEFAULT_PORT);
    }
}
