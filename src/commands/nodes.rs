//! Implementation of the `promptpalette nodes` command.

use super::Session;
use crate::host::NodeKind;

/// List nodes available under the session's host API, one per line.
pub fn cmd_nodes(session: &Session) -> String {
    let mut out = format!("Host API: {}\n", session.host_api);

    for node in NodeKind::available(session.host_api) {
        out.push_str(&format!(
            "  {:<22} {:<24} [{}]\n",
            node.id(),
            node.display_name(),
            node.category()
        ));
    }

    out
}
