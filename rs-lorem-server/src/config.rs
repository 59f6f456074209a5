use std::env;

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "RS_LOREM_HOST";

/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "RS_LOREM_PORT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT }
	}
}

impl ServerConfig {
	/// Reads the bind address from `RS_LOREM_HOST` / `RS_LOREM_PORT`.
	///
	/// Unset variables fall back to `127.0.0.1:5000`.
	///
	/// # Errors
	/// Returns an error if the port is not a valid `u16`.
	pub fn from_env() -> Result<Self, String> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Same as [`ServerConfig::from_env`] with a custom variable source.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
			config.host = host.trim().to_owned();
		}

		if let Some(port) = lookup(PORT_VAR) {
			config.port = port
				.trim()
				.parse::<u16>()
				.map_err(|_| format!("{PORT_VAR} must be a port number, got {port:?}"))?;
		}

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
			.collect();
		move |key| vars.get(key).cloned()
	}

	#[test]
	fn defaults_when_unset() {
		let config = ServerConfig::from_lookup(lookup_from(&[])).expect("valid config");
		assert_eq!(config, ServerConfig::default());
		assert_eq!(config.port, 5000);
	}

	#[test]
	fn reads_host_and_port() {
		let config = ServerConfig::from_lookup(lookup_from(&[(HOST_VAR, "0.0.0.0"), (PORT_VAR, " 8080 ")]))
			.expect("valid config");
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 8080);
	}

	#[test]
	fn blank_host_keeps_default() {
		let config = ServerConfig::from_lookup(lookup_from(&[(HOST_VAR, "  ")])).expect("valid config");
		assert_eq!(config.host, DEFAULT_HOST);
	}

	#[test]
	fn invalid_port_is_rejected() {
		let result = ServerConfig::from_lookup(lookup_from(&[(PORT_VAR, "http")]));
		assert_eq!(result, Err("RS_LOREM_PORT must be a port number, got \"http\"".to_owned()));
	}
}
