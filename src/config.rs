//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| HostError::InvalidEnv { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_ADDR),
        Some(value) => value
            .parse()
            .map_err(|_| HostError::InvalidEnv { var: "BIND_ADDR", value: value.to_owned() }),
    }
}
