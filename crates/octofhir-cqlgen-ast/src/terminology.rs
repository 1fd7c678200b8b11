//! Terminology declaration nodes

use std::fmt;

use crate::or_null;

/// A CQL valueset declaration
///
/// Renders as `valueset "Chlamydia (Tests)": 'https://.../ValueSet/x'`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    alias: Option<String>,
    url: Option<String>,
}

impl ValueSet {
    /// Create a valueset declaration
    pub fn new(alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            url: Some(url.into()),
        }
    }

    /// Set the alias
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }

    /// Set the canonical URL
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// The alias, if set
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "valueset \"{}\": '{}'",
            or_null(&self.alias),
            or_null(&self.url)
        )
    }
}

/// An inline CQL code literal declaration
///
/// Renders as `code "Chlamydia": '105629000'`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectReferenceCode {
    alias: Option<String>,
    code: Option<String>,
}

impl DirectReferenceCode {
    /// Create a direct reference code declaration
    pub fn new(alias: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            code: Some(code.into()),
        }
    }

    /// Set the alias
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }

    /// Set the code value
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = Some(code.into());
    }

    /// The alias, if set
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

impl fmt::Display for DirectReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code \"{}\": '{}'",
            or_null(&self.alias),
            or_null(&self.code)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn valueset_renders_alias_and_url() {
        let vs = ValueSet::new(
            "Chlamydia (Tests)",
            "https://example.org/ValueSet/chlamydia-tests",
        );
        assert_eq!(
            vs.to_string(),
            "valueset \"Chlamydia (Tests)\": 'https://example.org/ValueSet/chlamydia-tests'"
        );
    }

    #[test]
    fn direct_reference_code_renders_alias_and_code() {
        let code = DirectReferenceCode::new("Chlamydia", "105629000");
        assert_eq!(code.to_string(), "code \"Chlamydia\": '105629000'");
    }

    #[test]
    fn unset_fields_render_as_null_literals() {
        assert_eq!(ValueSet::default().to_string(), "valueset \"null\": 'null'");
        assert_eq!(
            DirectReferenceCode::default().to_string(),
            "code \"null\": 'null'"
        );
    }
}
