#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const RESUME: &str = "\
# Max Zhang
ECE student.

## Projects
### [ProofKit](https://example.com/proofkit)
**Date:** 2025-01
**Type:** ZK Protocol
**Tags:** ZK, Circom
**Description:** Privacy proofs.
**Images:** img1.png, img2.png
**Key Contributions:**
Built the circuit.
Shipped the demo.

### Just A Title
**Key Contributions:**
Wrote docs.
**Images:** shot.png
";

/// Create a `folio` command isolated from the user's config and colors.
#[allow(dead_code)]
pub fn folio_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("folio"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("FOLIO_BASE_URL");
    cmd.env_remove("FOLIO_TIMEOUT_SECS");
    cmd.env_remove("FOLIO_OUTPUT_FORMAT");
    cmd
}

/// `folio_cmd` reading config from `path`, which need not exist.
#[allow(dead_code)]
pub fn folio_cmd_with_config(path: &Path) -> Command {
    let mut cmd = folio_cmd();
    cmd.env("FOLIO_CONFIG", path);
    cmd
}
