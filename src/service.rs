//! Closed registry of translation providers
//!
//! The service menu offers exactly four providers. Dispatch is by tagged
//! variant, not by string, so an unknown service name is rejected at the
//! boundary instead of falling through silently.

/// One of the four translation services offered by the service menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Microsoft,
    DeepL,
    Google,
    Youdao,
}

impl Service {
    /// Entries in service-menu order
    pub const ALL: [Service; 4] = [
        Service::Microsoft,
        Service::DeepL,
        Service::Google,
        Service::Youdao,
    ];

    /// Name shown in the service menu
    pub fn menu_name(&self) -> &'static str {
        match self {
            Service::Microsoft => "Microsoft",
            Service::DeepL => "DeepL",
            Service::Google => "Google",
            Service::Youdao => "Youdao",
        }
    }

    /// Resolve a menu name to a service, exact match only
    ///
    /// The translate block passes menu values verbatim, so dispatch is
    /// case-sensitive; anything else is an unsupported service.
    pub fn from_menu_name(name: &str) -> Option<Service> {
        Service::ALL
            .iter()
            .copied()
            .find(|service| service.menu_name() == name)
    }

    /// Resolve a service name ignoring ASCII case
    ///
    /// The set-API-key block uppercased its input before lookup, so key
    /// storage accepts any casing of the four names.
    pub fn from_name_case_insensitive(name: &str) -> Option<Service> {
        Service::ALL
            .iter()
            .copied()
            .find(|service| service.menu_name().eq_ignore_ascii_case(name))
    }

    /// Whether translate calls against this service need a stored key
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Service::DeepL)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.menu_name())
    }
}
