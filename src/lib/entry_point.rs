//! JVM entry points the bootstrapper can launch

/// Selects which main class is launched and how the classpath is globbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
    /// Fully-qualified main class
    pub main_class: &'static str,
    /// Wildcard segment appended to the library directory
    pub library_glob: &'static str,
}

impl EntryPoint {
    /// The proxy with its default transport
    pub const BASE: EntryPoint = EntryPoint {
        main_class: "edu.uw.zookeeper.proxy.Main",
        library_glob: "*",
    };

    /// The proxy wired to the Netty NIO transport
    pub const NETTY: EntryPoint = EntryPoint {
        main_class: "edu.uw.zookeeper.proxy.netty.Main",
        library_glob: "*",
    };
}
