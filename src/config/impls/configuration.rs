use std::fs::File;
use std::io::Write;
use std::path::Path;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::scrape_config::ScrapeConfig;
use crate::session::session::DEFAULT_SESSION_LIFETIME;

const TRACKER_PATTERN: &str = r"^udp://[^/\s:]+(:\d{1,5})(/\S*)?$|^udp://\[[0-9a-fA-F:.]+\](:\d{1,5})(/\S*)?$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            scrape: ScrapeConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&ConfigurationError::EncodeError(e).to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` and applies the command line overrides.
    ///
    /// With a tracker given on the command line, a missing file is not an
    /// error: the defaults are used instead.
    pub fn load_with_overrides(path: &str, create: bool, tracker: Option<&str>, retry_limit: Option<u32>) -> Result<Configuration, CustomError> {
        let mut config = if tracker.is_some() && !create && !Path::new(path).exists() {
            Configuration::init()
        } else {
            Configuration::load_from_file(path, create)?
        };

        if let Some(tracker) = tracker {
            config.scrape.tracker = tracker.to_string();
        }
        if let Some(retry_limit) = retry_limit {
            config.scrape.retry_limit = retry_limit;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        parse_log_level(self.log_level.as_str())?;

        Self::validate_value("[scrape] tracker", &self.scrape.tracker, TRACKER_PATTERN)?;

        if self.scrape.timeout == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] [scrape] timeout must be at least 1 second"));
        }
        if self.scrape.dial_timeout == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] [scrape] dial_timeout must be at least 1 second"));
        }
        if self.scrape.session_lifetime > DEFAULT_SESSION_LIFETIME.as_secs() {
            return Err(CustomError::new(&format!(
                "[VALIDATE CONFIG] [scrape] session_lifetime must not exceed {} seconds",
                DEFAULT_SESSION_LIFETIME.as_secs()
            )));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), CustomError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| CustomError::new(&format!("[VALIDATE CONFIG] Invalid pattern for {name}: {e}")))?;
        if !regex_check.is_match(value) {
            return Err(CustomError::new(&format!(
                "[VALIDATE CONFIG] Error checking {} [:] Value: \"{}\" [:] Regex: \"{}\"", name, value, regex_check
            )));
        }
        Ok(())
    }
}
