//! Assembly references and versions as declared in module metadata.
//!
//! References use the display-name form
//! `Name[, Version=a.b.c.d][, Culture=xx][, PublicKeyToken=hex]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use depload_util::errors::DeploadError;

/// A four-part assembly version (`major.minor.build.revision`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AssemblyVersion {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl AssemblyVersion {
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl FromStr for AssemblyVersion {
    type Err = DeploadError;

    /// Parse two to four dot-separated components; missing ones are zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DeploadError::InvalidReference {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(invalid("version needs two to four components"));
        }

        let mut nums = [0u16; 4];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| invalid("version components must be numbers up to 65535"))?;
        }

        Ok(Self::new(nums[0], nums[1], nums[2], nums[3]))
    }
}

impl TryFrom<String> for AssemblyVersion {
    type Error = DeploadError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AssemblyVersion> for String {
    fn from(v: AssemblyVersion) -> Self {
        v.to_string()
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// A named, versioned pointer from one module to a dependency it requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssemblyReference {
    pub name: String,
    pub version: Option<AssemblyVersion>,
    pub culture: Option<String>,
    pub public_key_token: Option<String>,
}

impl AssemblyReference {
    /// A reference carrying only a simple name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            culture: None,
            public_key_token: None,
        }
    }

    /// Simple names compare case-insensitively.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl FromStr for AssemblyReference {
    type Err = DeploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DeploadError::InvalidReference {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split(',');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(invalid("missing assembly name"));
        }
        if name.contains('=') {
            return Err(invalid("assembly name must come before key=value pairs"));
        }

        let mut reference = Self::named(name);
        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let Some((key, value)) = part.split_once('=') else {
                return Err(invalid("expected key=value after the name"));
            };
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "version" => reference.version = Some(value.parse()?),
                "culture" => reference.culture = Some(value.to_string()),
                "publickeytoken" => reference.public_key_token = Some(value.to_ascii_lowercase()),
                other => tracing::trace!("ignoring assembly name key '{other}' in '{s}'"),
            }
        }

        Ok(reference)
    }
}

impl TryFrom<String> for AssemblyReference {
    type Error = DeploadError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AssemblyReference> for String {
    fn from(r: AssemblyReference) -> Self {
        r.to_string()
    }
}

impl fmt::Display for AssemblyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(version) = self.version {
            write!(f, ", Version={version}")?;
        }
        if let Some(ref culture) = self.culture {
            write!(f, ", Culture={culture}")?;
        }
        if let Some(ref token) = self.public_key_token {
            write!(f, ", PublicKeyToken={token}")?;
        }
        Ok(())
    }
}
