/// Render American odds the way the leaderboard displays them.
/// "+450" for underdogs, "-120" for favourites. Zero has no meaning in
/// American notation and passes through as "0".
pub fn format_american(odds: i64) -> String {
    if odds > 0 {
        format!("+{}", odds)
    } else {
        odds.to_string()
    }
}
