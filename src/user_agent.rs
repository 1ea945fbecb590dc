//! Mobile browser detection from the user-agent string.

use crate::page::UserAgentSource;

/// Platform and browser tokens that mark a user agent as mobile, lowercased
/// for case-insensitive matching.
const MOBILE_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// True if the source currently reports a mobile browser.
///
/// Heuristic only. The source is consulted on every call; nothing is cached
/// between calls.
pub fn is_mobile_browser(source: &dyn UserAgentSource) -> bool {
    is_mobile_user_agent(&source.user_agent())
}

/// Token test behind [`is_mobile_browser`], usable on a raw string.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|token| user_agent.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HeadlessPage;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

    #[test]
    fn desktop_agents_are_not_mobile() {
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/120.0.0.0 Safari/537.36"
        ));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn known_platform_tokens_match() {
        assert!(is_mobile_user_agent(IPHONE_UA));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36"
        ));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(is_mobile_user_agent("Mozilla/5.0 (compatible; MSIE 10.0; IEMobile/10.0)"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_mobile_user_agent("mozilla/5.0 (linux; ANDROID 14)"));
        assert!(is_mobile_user_agent("something WEBOS something"));
    }

    #[test]
    fn reads_the_injected_source() {
        let mobile = HeadlessPage::with_user_agent(IPHONE_UA);
        assert!(is_mobile_browser(&mobile));

        let desktop = HeadlessPage::new();
        assert!(!is_mobile_browser(&desktop));
    }
}
