use crate::types::record::LoaderFamily;

/// Environment a descriptor declares. The wire value `*` and an absent
/// Fabric/Quilt field both normalize to `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredEnv {
    Client,
    Server,
    Both,
}

impl DeclaredEnv {
    /// Normalize a raw environment string. Anything that is not an explicit
    /// `client`/`server` is treated like the `*` default.
    pub(crate) fn from_wire(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "client" => DeclaredEnv::Client,
            "server" => DeclaredEnv::Server,
            _ => DeclaredEnv::Both,
        }
    }
}

/// Entrypoint categories a descriptor declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntrypointSet {
    pub client: bool,
    pub server: bool,
    pub main: bool,
}

/// Descriptor identity fields. Everything is optional; mods in the wild omit
/// any of them.
#[derive(Debug, Clone, Default)]
pub struct ModDescriptor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

/// What a recognized descriptor told us. Derived per analysis pass, never
/// persisted on its own.
#[derive(Debug, Clone)]
pub struct MetadataSignal {
    pub family: LoaderFamily,
    /// `None` for families without a reliable environment field (Forge,
    /// NeoForge, LegacyForge, Rift); presence of their manifest tags the
    /// family only and is never verdict evidence.
    pub environment: Option<DeclaredEnv>,
    pub entrypoints: EntrypointSet,
    pub descriptor: ModDescriptor,
}
