use anyhow::Context;
use clap::Parser;
use property_listings::client::{image_data_uri, PropertyClient};
use property_listings::config::AddArgs;
use property_listings::domain::NewProperty;
use property_listings::{init_logging, run_server, CliArgs, Command, ServerConfig};
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = CliArgs::parse();

    match cli.command {
        Command::Serve(args) => run_server(ServerConfig::from_args(args)),
        Command::List(api) => {
            let client = PropertyClient::new(&api.api_url)?;
            print_json(&client.list()?)
        }
        Command::Get { id, api } => {
            let client = PropertyClient::new(&api.api_url)?;
            print_json(&client.get(id)?)
        }
        Command::Add(args) => {
            let client = PropertyClient::new(&args.api.api_url)?;
            let new_prop = build_new_property(args)?;
            print_json(&client.create(&new_prop)?)
        }
        Command::Delete { id, api } => {
            let client = PropertyClient::new(&api.api_url)?;
            println!("{}", client.delete(id)?);
            Ok(())
        }
    }
}

fn build_new_property(args: AddArgs) -> anyhow::Result<NewProperty> {
    let mut images = Vec::with_capacity(args.images.len() + args.image_urls.len());
    for path in &args.images {
        images.push(image_data_uri(path).with_context(|| "embed image")?);
    }
    images.extend(args.image_urls);

    Ok(NewProperty {
        name: Some(args.name),
        address: Some(args.address),
        price: Some(args.price),
        description: args.description,
        images: Some(images),
        owner_name: args.owner_name,
        owner_email: args.owner_email,
        owner_phone: args.owner_phone,
        documents: Some(args.documents),
        available_for_visit: Some(!args.no_visits),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
