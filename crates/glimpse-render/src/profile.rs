//! Profile card view.

use colored::Colorize;

use glimpse_core::gitlab::UserProfile;

/// Joined date shown on the card: the substring of the ISO timestamp
/// before the first 'T', or the literal "N/A" when absent.
pub fn joined_date(created_at: Option<&str>) -> String {
    match created_at {
        Some(timestamp) => timestamp
            .split('T')
            .next()
            .unwrap_or(timestamp)
            .to_string(),
        None => "N/A".to_string(),
    }
}

/// Builds the identity card lines for a profile.
///
/// Pure function of the profile; rendering the same profile twice
/// yields identical lines.
pub fn profile_card(user: &UserProfile) -> Vec<String> {
    let mut lines = vec![
        format!("Full Profile: {}", user.name).bold().to_string(),
        format!("  Username: {}", user.username.as_str().cyan()),
        format!("  ID:       {}", user.id.to_string().cyan()),
        format!("  State:    {}", user.state.as_str().cyan()),
        format!(
            "  Joined:   {}",
            joined_date(user.created_at.as_deref()).cyan()
        ),
    ];
    if let Some(web_url) = &user.web_url {
        lines.push(format!("  Profile:  {}", web_url.as_str().underline()));
    }
    if let Some(avatar_url) = &user.avatar_url {
        lines.push(format!("  Avatar:   {}", avatar_url.as_str().underline()));
    }
    lines
}

/// The complete server record, pretty-printed.
pub fn raw_record(user: &UserProfile) -> String {
    serde_json::to_string_pretty(user).unwrap_or_else(|_| "{}".to_string())
}

/// Prints the profile card, optionally followed by the raw record
/// (the terminal rendition of the expandable details view).
pub fn render_profile(user: &UserProfile, show_raw: bool) {
    println!();
    for line in profile_card(user) {
        println!("{line}");
    }
    if show_raw {
        println!();
        println!("{}", "All available profile details:".bright_black());
        for line in raw_record(user).lines() {
            println!("{}", line.bright_black());
        }
    } else {
        println!(
            "{}",
            "  (/profile full shows all available details)".bright_black()
        );
    }
    println!();
}
