/// Checks a media type against the client's Accept list.
///
/// An empty list accepts anything. Entries match exactly, through `*/*`, or
/// through a `type/*` range; parameters such as `;q=0.8` are ignored.
///
/// # Example
///
/// ```
/// # use gatehouse::http::negotiate::is_acceptable;
/// let accept = vec!["application/json".to_string(), "text/*;q=0.5".to_string()];
/// assert!(is_acceptable(&accept, "text/css"));
/// assert!(!is_acceptable(&accept[..1], "text/html"));
/// assert!(is_acceptable(&[], "text/html"));
/// ```
pub fn is_acceptable(accept: &[String], media_type: &str) -> bool {
    if accept.is_empty() {
        return true;
    }

    let main_type = media_type.split('/').next().unwrap_or(media_type);

    accept.iter().any(|entry| {
        let range = entry.split(';').next().unwrap_or("").trim();
        match range.split_once('/') {
            Some(("*", "*")) => true,
            Some((t, "*")) => t.eq_ignore_ascii_case(main_type),
            _ => range.eq_ignore_ascii_case(media_type),
        }
    })
}
