use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = safelinks_api::Args::parse();
	safelinks_api::run(args).await
}
