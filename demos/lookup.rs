use clap::{Parser, Subcommand};
use yageo::{ClientConfig, GeoDecoder, GeoLocator, Gsm, Ip, Lang, WiFi};

/// yageo lookup demo: exercises the geolocation and geocoding clients.
///
/// Examples:
///   lookup --key KEY ip 178.247.233.32
///   lookup --key KEY wifi 00-1C-F0-E4-BB-F5
///   lookup --key KEY gsm 250 99 42332 36002
///   lookup point 55.753083 37.587614
///   lookup address "Москва, улица Новый Арбат, 24" --qty 3
#[derive(Parser)]
#[command(name = "lookup", version, about, long_about = None)]
struct Cli {
    /// API key. Required for ip/wifi/gsm.
    #[arg(long, env = "YAGEO_KEY")]
    key: Option<String>,

    /// Response language (ru_RU, uk_UA, be_BY, en_US, en_BR, tr_TR).
    #[arg(long, default_value = "ru_RU")]
    lang: Lang,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Locate by public IPv4 address.
    Ip { address: String },
    /// Locate by one or more Wi-Fi MAC addresses.
    Wifi {
        #[arg(required = true)]
        macs: Vec<String>,
    },
    /// Locate by a single GSM cell.
    Gsm {
        countrycode: i32,
        operatorid: i32,
        cellid: i32,
        lac: i32,
    },
    /// Address for a latitude/longitude pair.
    Point {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
    /// Points for a free-text address.
    Address {
        address: String,
        #[arg(long, default_value_t = yageo::geocoder::DEFAULT_RESULTS)]
        qty: u8,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ClientConfig::new()
        .with_lang(cli.lang)
        .with_timeout(std::time::Duration::from_secs(cli.timeout));
    if let Some(key) = cli.key {
        config = config.with_key(key);
    }

    if let Err(e) = run(cli.command, config) {
        eprintln!("Error: {}", e);
        if let yageo::GeoError::Service { body, request, .. } = &e {
            eprintln!("  Request: {}", request);
            eprintln!("  Response: {}", body);
        }
        std::process::exit(1);
    }
}

fn run(command: Command, config: ClientConfig) -> yageo::Result<()> {
    match command {
        Command::Ip { address } => {
            let ip = Ip::new(address);
            println!("ip = {}", to_json(&ip));
            match GeoLocator::new(config)?.get_by_ip(&ip)? {
                Some(pos) => println!("Position = {}", to_json(&pos)),
                None => println!("Position = null (internal address)"),
            }
        }
        Command::Wifi { macs } => {
            let networks: Vec<WiFi> = macs.into_iter().map(WiFi::new).collect();
            println!("wifi_networks = {}", to_json(&networks));
            let pos = GeoLocator::new(config)?.get_by_wifi(&networks)?;
            println!("Position = {}", to_json(&pos));
        }
        Command::Gsm { countrycode, operatorid, cellid, lac } => {
            let cells = vec![Gsm::new(countrycode, operatorid, cellid, lac)];
            println!("gsm_cells = {}", to_json(&cells));
            let pos = GeoLocator::new(config)?.get_by_gsm(&cells)?;
            println!("Position = {}", to_json(&pos));
        }
        Command::Point { latitude, longitude } => {
            println!("Position = {{\"latitude\":{},\"longitude\":{}}}", latitude, longitude);
            match GeoDecoder::new(config).get_address_by_point(latitude, longitude)? {
                Some(address) => println!("Address = {}", to_json(&address)),
                None => println!("Address = null"),
            }
        }
        Command::Address { address, qty } => {
            let hits = GeoDecoder::new(config).get_points_by_address(&address, qty)?;
            println!("Found {} match(es)", hits.len());
            for (i, hit) in hits.iter().enumerate() {
                println!("  {}. {}", i + 1, to_json(hit));
            }
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}
