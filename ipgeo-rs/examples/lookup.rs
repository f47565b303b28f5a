use ipgeo_rs::IpGeo;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let geo = IpGeo::init(None).expect("failed to build HTTP client");

    let my_ip = geo.my_ip().await;
    println!("my ip: {:?}", my_ip);

    let ip = my_ip.unwrap_or_else(|| "8.8.8.8".to_string());
    match geo.details(&ip).await {
        Ok(details) => {
            for (label, value) in details.fields() {
                println!("{label}: {value}");
            }
        }
        Err(e) => println!("{e}"),
    }

    if let Some(links) = geo.map_links(&ip).await {
        for (provider, url) in links.iter() {
            println!("{provider}: {url}");
        }
    }
}
