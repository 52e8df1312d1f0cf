/// Normalizes a user-supplied team name for lookup.
///
/// Stored team names are bare school names, while visitors type the full
/// municipal form ("旭川市立X中学校").  Strip the prefix and the school
/// suffixes so a substring match finds the stored row.
pub fn trim_team_name(team_name: &str) -> String {
    let name = team_name.trim();
    let name = name.strip_prefix("旭川市立").unwrap_or(name);
    let name = name.strip_suffix("学校").unwrap_or(name);
    let name = name.strip_suffix("中").unwrap_or(name);
    name.trim().to_owned()
}
