//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner when the chat panel starts.
///
/// Shows which responder answers and which page is reported with messages.
pub fn print_welcome_banner(responder: &str, page: &str, endpoint: Option<&str>) {
    println!();
    println!("  * {}", style("Premier Bank Assistant").cyan().bold());
    println!("  {}", style("Ask about home loans, car loans, or loan eligibility.").dim());
    println!();
    println!("  {}  {}", style("Responder:").bold(), style(responder).dim());
    if let Some(endpoint) = endpoint {
        println!("  {}   {}", style("Endpoint:").bold(), style(endpoint).dim());
    }
    println!("  {}       {}", style("Page:").bold(), style(page).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
