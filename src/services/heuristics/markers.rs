/// What kind of client-only evidence a heuristic hit represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A text constant referencing a client-side code namespace.
    ClientNamespace,
    /// A mixin descriptor with a non-empty `client` section.
    ClientMixinSection,
    /// A text constant referencing a client-only rendering/windowing library.
    ClientLibrary,
}

/// Fixed marker set tested against every extracted text constant.
///
/// Matching is substring-based: constant-pool strings carry both plain class
/// paths and `L...;`-style descriptors.
pub(super) const CLIENT_MARKERS: &[(&str, MarkerKind)] = &[
    ("net/minecraft/client/", MarkerKind::ClientNamespace),
    (
        "net/fabricmc/api/ClientModInitializer",
        MarkerKind::ClientNamespace,
    ),
    ("com/mojang/blaze3d/", MarkerKind::ClientLibrary),
    ("org/lwjgl/", MarkerKind::ClientLibrary),
];
