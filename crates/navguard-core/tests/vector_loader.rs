//! JSON test vector loader shared by whitelist tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

use navguard_core::WhitelistPolicy;

#[derive(Debug, Deserialize)]
pub struct PolicyVector {
    pub description: String,
    /// `None` => never configured.
    pub whitelist: Option<Vec<String>>,
    #[serde(default)]
    pub allow_subdomains: bool,
    pub cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
pub struct Case {
    pub url: String,
    pub allowed: bool,
    pub reason: String,
}

impl PolicyVector {
    pub fn policy(&self) -> WhitelistPolicy {
        match &self.whitelist {
            Some(list) => WhitelistPolicy::configured(list, self.allow_subdomains),
            None => WhitelistPolicy::disabled(),
        }
    }
}

pub fn load(name: &str) -> PolicyVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
