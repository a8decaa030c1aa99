use crate::{error, spotify};

/// Shows the authenticated user's profile.
///
/// The optional fields depend on the granted scopes; absent ones are
/// simply not printed.
pub async fn me() {
    let token = super::access_token().await;

    match spotify::users::get_current_profile(&token).await {
        Ok(profile) => {
            println!(
                "{name} ({id})",
                name = profile.display_name.as_deref().unwrap_or("<no display name>"),
                id = profile.id
            );
            if let Some(email) = &profile.email {
                println!("  email: {}", email);
            }
            if let Some(country) = &profile.country {
                println!("  country: {}", country);
            }
            if let Some(product) = &profile.product {
                println!("  product: {}", product);
            }
        }
        Err(e) => error!("Failed to fetch profile: {}", e),
    }
}
