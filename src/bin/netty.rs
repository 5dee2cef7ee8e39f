//! zookeeper-proxy-netty
//!
//! Same as `zookeeper-proxy`, but launches the proxy on the Netty transport.

use zookeeper_proxy_bootstrap::{run, EntryPoint};

fn main() {
    run(EntryPoint::NETTY)
}
