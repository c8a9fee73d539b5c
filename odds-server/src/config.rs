//! Input files and server settings.
//!
//! The mission configuration names the vehicle, its route and the route
//! database; the empire plan carries the deadline and the known sightings.
//! Both are JSON documents.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{EmpirePlan, Location, Sighting, UnknownLocation};
use crate::planner::{ConfigError, EngineConfig};

/// Environment variable holding the mission configuration path.
pub const CONFIG_ENV: &str = "ODDS_CONFIG";

/// Environment variable holding the server bind address.
pub const BIND_ADDR_ENV: &str = "ODDS_BIND_ADDR";

/// Bind address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error raised while loading an input file.
#[derive(Debug, Error)]
pub enum MissionFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownLocation(#[from] UnknownLocation),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn read(path: &Path) -> Result<String, MissionFileError> {
    std::fs::read_to_string(path).map_err(|source| MissionFileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Mission configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionFile {
    /// Days of travel on a full tank.
    pub autonomy: u32,

    pub departure: String,

    pub arrival: String,

    /// Route database, relative to the configuration file unless absolute.
    pub routes_db: PathBuf,
}

impl MissionFile {
    /// Parse a configuration document. `routes_db` is left as written.
    pub fn from_json(json: &str) -> Result<Self, MissionFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file, resolving `routes_db` against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MissionFileError> {
        let path = path.as_ref();
        let mut mission = Self::from_json(&read(path)?)?;

        if mission.routes_db.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            mission.routes_db = base.join(&mission.routes_db);
        }

        Ok(mission)
    }

    /// Validate into an engine configuration.
    pub fn engine_config(&self) -> Result<EngineConfig, MissionFileError> {
        let departure = Location::parse(&self.departure)?;
        let arrival = Location::parse(&self.arrival)?;

        Ok(EngineConfig::new(departure, arrival, self.autonomy)?)
    }
}

/// A sighting as written in the empire plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyHunter {
    pub planet: String,
    pub day: u32,
}

/// Intercepted empire plan as sent by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmpirePlanFile {
    /// Deadline, in days.
    pub countdown: u32,

    #[serde(default)]
    pub bounty_hunters: Vec<BountyHunter>,
}

impl EmpirePlanFile {
    pub fn from_json(json: &str) -> Result<Self, MissionFileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, MissionFileError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MissionFileError> {
        Self::from_json(&read(path.as_ref())?)
    }

    /// Resolve planet names into a plan.
    pub fn resolve(&self) -> Result<EmpirePlan, UnknownLocation> {
        let sightings = self
            .bounty_hunters
            .iter()
            .map(|hunter| {
                Location::parse(&hunter.planet).map(|planet| Sighting::new(planet, hunter.day))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EmpirePlan::new(self.countdown, sightings))
    }
}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Mission configuration file.
    pub mission: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,
}

/// Error in the server environment.
#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let mission = lookup(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or(ServerConfigError::Missing(CONFIG_ENV))?;

        let value = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = value
            .parse()
            .map_err(|source| ServerConfigError::BindAddr { value, source })?;

        Ok(Self { mission, bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const MILLENNIUM_FALCON: &str = r#"{
        "autonomy": 6,
        "departure": "Tatooine",
        "arrival": "Endor",
        "routes_db": "universe.db"
    }"#;

    #[test]
    fn routes_db_resolved_next_to_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("millennium-falcon.json");
        std::fs::write(&path, MILLENNIUM_FALCON).unwrap();

        let mission = MissionFile::load(&path).unwrap();

        assert_eq!(mission.routes_db, dir.path().join("universe.db"));
        assert_eq!(mission.autonomy, 6);
    }

    #[test]
    fn absolute_routes_db_kept() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("elsewhere").join("universe.db");
        let path = dir.path().join("mission.json");
        let json = serde_json::json!({
            "autonomy": 6,
            "departure": "Tatooine",
            "arrival": "Endor",
            "routes_db": &db,
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let mission = MissionFile::load(&path).unwrap();

        assert_eq!(mission.routes_db, db);
    }

    #[test]
    fn engine_config_from_mission() {
        let config = MissionFile::from_json(MILLENNIUM_FALCON)
            .unwrap()
            .engine_config()
            .unwrap();

        assert_eq!(config.departure, Location::Tatooine);
        assert_eq!(config.arrival, Location::Endor);
        assert_eq!(config.autonomy, 6);
    }

    #[test]
    fn engine_config_rejects_unknown_location() {
        let mut mission = MissionFile::from_json(MILLENNIUM_FALCON).unwrap();
        mission.arrival = "Alderaan".into();

        let err = mission.engine_config().unwrap_err();

        assert!(matches!(err, MissionFileError::UnknownLocation(_)));
    }

    #[test]
    fn engine_config_rejects_zero_autonomy() {
        let mut mission = MissionFile::from_json(MILLENNIUM_FALCON).unwrap();
        mission.autonomy = 0;

        let err = mission.engine_config().unwrap_err();

        assert!(matches!(err, MissionFileError::Config(ConfigError::ZeroAutonomy)));
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let err = MissionFile::load(dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, MissionFileError::Read { .. }));
    }

    #[test]
    fn empire_plan_resolves_sightings() {
        let file = EmpirePlanFile::from_json(
            r#"{
                "countdown": 7,
                "bounty_hunters": [
                    {"planet": "Hoth", "day": 6},
                    {"planet": "Hoth", "day": 7},
                    {"planet": "Hoth", "day": 8}
                ]
            }"#,
        )
        .unwrap();

        let plan = file.resolve().unwrap();

        assert_eq!(plan.deadline, 7);
        assert_eq!(plan.sightings.len(), 3);
        assert!(plan.sightings.contains(Location::Hoth, 7));
    }

    #[test]
    fn empire_plan_without_hunters() {
        let plan = EmpirePlanFile::from_json(r#"{"countdown": 3}"#)
            .unwrap()
            .resolve()
            .unwrap();

        assert_eq!(plan.deadline, 3);
        assert!(plan.sightings.is_empty());
    }

    #[test]
    fn empire_plan_unknown_planet() {
        let file = EmpirePlanFile::from_json(
            r#"{"countdown": 7, "bounty_hunters": [{"planet": "Naboo", "day": 1}]}"#,
        )
        .unwrap();

        assert_eq!(file.resolve().unwrap_err().name(), "Naboo");
    }

    #[test]
    fn empire_plan_rejects_negative_countdown() {
        let err = EmpirePlanFile::from_json(r#"{"countdown": -1}"#).unwrap_err();
        assert!(matches!(err, MissionFileError::Parse(_)));
    }

    #[test]
    fn server_config_defaults_bind_addr() {
        let env = HashMap::from([(CONFIG_ENV, "/srv/millennium-falcon.json")]);

        let config = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.mission, PathBuf::from("/srv/millennium-falcon.json"));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
    }

    #[test]
    fn server_config_requires_mission() {
        let err = ServerConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ServerConfigError::Missing(CONFIG_ENV)));
    }

    #[test]
    fn server_config_rejects_bad_addr() {
        let env = HashMap::from([(CONFIG_ENV, "mission.json"), (BIND_ADDR_ENV, "nowhere")]);

        let err = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap_err();

        assert!(matches!(err, ServerConfigError::BindAddr { .. }));
    }
}
