//! zookeeper-proxy
//!
//! Launches the ZooKeeper proxy on the JVM. Every argument is passed through to
//! the proxy unchanged.
//!
//! Environment:
//! - ZOOKEEPER_PROXY_PREFIX, ZOOKEEPER_PROXY_LIB, ZOOKEEPER_PROXY_ETC: install layout
//! - ZOOKEEPER_PROXY_LOG_CONFIG: log4j flag, skips discovery in the etc directory
//! - JAVA_HOME: JVM to use instead of `java` on PATH
//! - JAVA_ARGS: extra JVM arguments, shell quoted
//! - ZOOKEEPER_PROXY_VERBOSE, ZOOKEEPER_PROXY_DRY_RUN: bootstrapper diagnostics

use zookeeper_proxy_bootstrap::{run, EntryPoint};

fn main() {
    run(EntryPoint::BASE)
}
