use std::sync::Arc;

use anyhow::Context;
use recruitment_backoffice::{
    config::{get_config, init_config},
    models::Resource,
    routes::{self, View},
    screens::list::{ListController, ListStatus},
    storage::token_store::FileTokenStore,
    widgets::dropdown::DropdownOption,
    AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.log_json);

    let tokens = Arc::new(FileTokenStore::new(&config.storage_path));
    info!(
        api = %config.api_base_url,
        storage = %tokens.path().display(),
        "Back-office shell starting"
    );
    let state = AppState::new(config, tokens)?;

    let mut args = std::env::args().skip(1);
    let target = args.next();
    if target.as_deref() == Some("--routes") {
        for route in routes::sidebar_links() {
            println!("{:<24} {:<28} {:?}", route.name, route.full_path(), route.icon);
        }
        return Ok(());
    }

    let page: u32 = args
        .next()
        .map(|raw| raw.parse())
        .transpose()
        .context("page must be a positive number")?
        .unwrap_or(1);

    let route = match target {
        Some(path) => {
            routes::resolve(&path).with_context(|| format!("Unknown route: {}", path))?
        }
        None => routes::default_route(),
    };
    info!("Opening {}", route);

    match route.view {
        View::Offers => {
            show_list(state.offer_list(), page).await;
            println!("Ajouter une offre: {}", routes::add_offer_path());
        }
        View::Applications => show_list(state.application_list(), page).await,
        View::Users => show_list(state.admin_list(), page).await,
        View::Events | View::EventManagement => show_list(state.event_list(), page).await,
        View::Portfolio | View::PortfolioManagement => {
            show_list(state.portfolio_list(), page).await
        }
        View::OfferManagement => {
            let form = state.offer_form();
            print_options("Département", form.departement.options());
            print_options("Type de Contrat", form.contract.options());
            print_options("Type", form.employment_type.options());
        }
        View::Dashboard | View::SignIn | View::Register => {
            info!(view = ?route.view, "No data screen for this view");
        }
    }

    Ok(())
}

async fn show_list<R: Resource>(list: ListController<R>, page: u32) {
    if page > 1 {
        list.set_page(page).await;
    } else {
        list.mount().await;
    }

    let view = list.snapshot();
    match &view.status {
        ListStatus::Failed(message) => eprintln!("{}", message),
        ListStatus::Loading => println!("Chargement..."),
        ListStatus::Ready => {
            match view.table() {
                Some(table) if !table.is_empty() => println!("{}", table.to_text()),
                _ => println!("Aucun élément disponible"),
            }
            if view.shows_pagination() {
                println!("{}", view.page_label());
            }
        }
    }
}

fn print_options<T: DropdownOption>(title: &str, options: &[T]) {
    println!("{}:", title);
    for option in options {
        println!("  - {} ({})", option.label(), option.value());
    }
}
