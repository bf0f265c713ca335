//! Site routes and outbound links
//!
//! Pages are addressed by the same paths as the public site so links such as
//! `/reserver?product=karting-loisir-20` can be passed straight to the CLI.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum Route {
    #[default]
    Home,
    Academy,
    Formations,
    Garage,
    Dealer,
    Investor,
    Infrastructure,
    Marketplace,
    Process,
    Reserver,
    Contact,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Academy => "/academy",
            Self::Formations => "/formations",
            Self::Garage => "/garage",
            Self::Dealer => "/dealer",
            Self::Investor => "/investor",
            Self::Infrastructure => "/infrastructure",
            Self::Marketplace => "/marketplace",
            Self::Process => "/process",
            Self::Reserver => "/reserver",
            Self::Contact => "/contact",
        }
    }

    /// Route for a path, ignoring a trailing slash or `#fragment`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split('#').next().unwrap_or("");
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::iter().find(|r| r.path() == path)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Accueil",
            Self::Academy => "L'Académie",
            Self::Formations => "Formations",
            Self::Garage => "Garage",
            Self::Dealer => "Dealer",
            Self::Investor => "Investisseurs",
            Self::Infrastructure => "Infrastructure",
            Self::Marketplace => "Nos véhicules",
            Self::Process => "Processus",
            Self::Reserver => "Réservation",
            Self::Contact => "Contact",
        }
    }

    /// Dealer-side pages use the sidebar navigation instead of the academy
    /// header
    pub fn uses_sidebar(&self) -> bool {
        matches!(self, Self::Marketplace | Self::Process)
    }
}

/// Academy header navigation, in display order
pub const HEADER_NAV: [(&str, Route); 6] = [
    ("L'Académie", Route::Academy),
    ("Formations", Route::Formations),
    ("Investisseurs", Route::Investor),
    ("Infrastructure", Route::Infrastructure),
    ("Dealer", Route::Dealer),
    ("Garage", Route::Garage),
];

/// Header call-to-action
pub const HEADER_CTA: (&str, Route) = ("Contact", Route::Contact);

/// Dealer sidebar navigation
pub const SIDEBAR_NAV: [(&str, Route); 4] = [
    ("Accueil", Route::Home),
    ("Nos véhicules", Route::Marketplace),
    ("Processus", Route::Process),
    ("Contact", Route::Contact),
];

/// A route plus its decoded query parameters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub route: Route,
    pub query: Vec<(String, String)>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            query: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Parse `path?query`. Unknown paths fall back to the home page.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, query.split('#').next().unwrap_or("")),
            None => (input, ""),
        };

        let route = Route::from_path(path).unwrap_or_else(|| {
            tracing::warn!("Unknown route {:?}, opening home page", path);
            Route::Home
        });

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_query_component(key), decode_query_component(value))
            })
            .collect();

        Self { route, query }
    }

    /// First value of a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route.path())?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{sep}{}={}",
                encode_uri_component(key),
                encode_uri_component(value)
            )?;
        }
        Ok(())
    }
}

impl From<Route> for Location {
    fn from(route: Route) -> Self {
        Self::new(route)
    }
}

/// Characters `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value or message, byte by byte over UTF-8
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Decode a query-string component: `+` is a space, `%XX` a byte.
/// Malformed escapes are kept literally.
pub fn decode_query_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Default WhatsApp number of the dealership
pub const DEFAULT_WHATSAPP_NUMBER: &str = "35200000000";

/// Pre-filled WhatsApp chat link
pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{number}?text={}", encode_uri_component(text))
}

/// Canned WhatsApp messages used by the call-to-action buttons
pub mod messages {
    pub const GENERAL: &str = "Bonjour SL Automotive, je souhaite des infos.";
    pub const DOSSIER: &str =
        "Bonjour SL Automotive, je souhaite obtenir le dossier d’un véhicule.";
    pub const PROCESS: &str = "Bonjour SL Automotive, je souhaite des infos sur votre processus.";
    pub const BUY: &str = "Bonjour SL Automotive, je veux acheter une voiture.";

    /// Message about a specific vehicle
    pub fn vehicle(name: &str, stock_id: &str) -> String {
        format!(
            "Bonjour SL Automotive, je suis intéressé par le {name} (Stock {stock_id}). Est-il disponible ?"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_tolerates_trailing_slash_and_fragment() {
        assert_eq!(Route::from_path("/garage/"), Some(Route::Garage));
        assert_eq!(Route::from_path("/#contact"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/blog"), None);
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("BMW 330i"), "BMW%20330i");
        assert_eq!(encode_uri_component("intéressé ?"), "int%C3%A9ress%C3%A9%20%3F");
        assert_eq!(encode_uri_component("(Stock SLA-0001)."), "(Stock%20SLA-0001).");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a&b=c#d/e+f"), "a%26b%3Dc%23d%2Fe%2Bf");
    }

    #[test]
    fn test_decode_query_component() {
        assert_eq!(decode_query_component("a+b%20c"), "a b c");
        assert_eq!(decode_query_component("100%"), "100%");
        assert_eq!(decode_query_component("%zz"), "%zz");
        assert_eq!(decode_query_component("int%C3%A9ress%C3%A9"), "intéressé");
    }
}
