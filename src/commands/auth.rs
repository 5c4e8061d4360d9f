use crate::context::AppContext;
use crate::error::Result;
use colored::Colorize;

/// Log in and persist the session
pub async fn login(ctx: &AppContext, username: &str, password: &str) -> Result<()> {
    let user = ctx.session().login(username, password).await?;
    println!(
        "{}",
        format!("Logged in as {} ({})", user.full_name(), user.username).green()
    );
    Ok(())
}

/// Clear the session
pub fn logout(ctx: &AppContext) {
    let was_authenticated = ctx.session().is_authenticated();
    ctx.session().logout();
    if was_authenticated {
        println!("{}", "Logged out.".green());
    } else {
        println!("{}", "No active session.".yellow());
    }
}

/// Print the logged-in user
pub fn whoami(ctx: &AppContext) {
    match ctx.session().user() {
        Some(user) => {
            println!("{} {}", "User:".bold(), user.full_name());
            println!("{} {}", "Username:".bold(), user.username);
            println!("{} {}", "Email:".bold(), user.email);
        }
        None if ctx.session().is_authenticated() => {
            println!("{}", "Authenticated (no user profile stored).".yellow());
        }
        None => {
            println!(
                "{} Use {} to sign in.",
                "Not logged in.".yellow(),
                "catalog-admin login".cyan()
            );
        }
    }
}
