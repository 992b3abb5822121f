use anyhow::Context;
use idcodable::{IdCodable, ModeSeed, SerializationMode, WithMode, id_codable};
use serde::de::DeserializeSeed;
use tracing::info;

/// Environment variable selecting the serialization mode (`id` or `codable`).
const MODE_VAR: &str = "IDCODABLE_MODE";

id_codable! {
    #[allow(non_camel_case_types)]
    pub enum Itemgroup: String {
        #[codable(id = "M5Q1Q7CA7P", codable = "Test 1")]
        TEST_1,
        #[codable(id = "OA1G29Y2D5", codable = "Test 2")]
        TEST_2,
    }
}

id_codable! {
    #[allow(non_camel_case_types)]
    pub enum Status: i64 {
        #[codable(id = "TB4AKAOM84", codable = 1)]
        created,
        #[codable(id = "DJX3SZZVCN", codable = 2)]
        started,
    }
}

fn mode_from_env() -> anyhow::Result<SerializationMode> {
    match std::env::var(MODE_VAR) {
        Ok(value) => value
            .parse::<SerializationMode>()
            .with_context(|| format!("invalid {MODE_VAR}")),
        Err(std::env::VarError::NotPresent) => Ok(SerializationMode::default()),
        Err(e) => Err(e).with_context(|| format!("reading {MODE_VAR}")),
    }
}

fn show<T>(mode: SerializationMode) -> anyhow::Result<()>
where
    T: IdCodable + serde::Serialize + serde::de::DeserializeOwned,
{
    let name = std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or_default();

    for case in T::all() {
        let encoded = serde_json::to_string(&WithMode::new(mode, case))?;

        let mut deserializer = serde_json::Deserializer::from_str(&encoded);
        let decoded: T = ModeSeed::new(mode).deserialize(&mut deserializer)?;
        anyhow::ensure!(decoded == *case, "{case:?} did not round-trip through {encoded}");

        println!(
            "{name}::{case:?}\tid={}\tcodable={}\t{mode}={encoded}",
            case.id(),
            case.codable()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mode = mode_from_env()?;
    info!(%mode, "encoding sample enums");

    show::<Itemgroup>(mode)?;
    show::<Status>(mode)?;
    Ok(())
}
