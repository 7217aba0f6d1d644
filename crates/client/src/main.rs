use anyhow::{Context, bail};

use stockscout_client::{ApiClient, SearchForm, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Table,
    Cards,
}

struct Args {
    base_url: String,
    form: SearchForm,
    view: View,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args {
        base_url: "http://127.0.0.1:8080".to_string(),
        form: SearchForm::default(),
        view: View::Table,
    };

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .with_context(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--base-url" => parsed.base_url = value()?,
            "--q" => parsed.form.q = Some(value()?),
            "--category" => parsed.form.category = Some(value()?),
            "--min-price" => parsed.form.min_price = Some(value()?),
            "--max-price" => parsed.form.max_price = Some(value()?),
            "--view" => {
                parsed.view = match value()?.as_str() {
                    "table" => View::Table,
                    "cards" => View::Cards,
                    other => bail!("unknown view '{other}' (expected 'table' or 'cards')"),
                }
            }
            other => bail!("unknown flag '{other}'"),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockscout_observability::init();

    let args = parse_args(std::env::args().skip(1))?;
    let client = ApiClient::new(&args.base_url);

    let categories = client
        .categories()
        .await
        .context("failed to list categories")?;
    println!("categories: {}", categories.join(", "));
    println!();

    let response = client
        .search(&args.form)
        .await
        .context("search failed")?;

    let rendered = match args.view {
        View::Table => render::render_table(&response.results),
        View::Cards => render::render_cards(&response.results),
    };
    print!("{rendered}");
    println!("{} record(s)", response.count);

    Ok(())
}
