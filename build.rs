// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Source tarballs carry no git metadata; `version` then reports the
    // crate version alone.
    if let Err(err) = EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()
    {
        println!("cargo:warning=git metadata unavailable: {}", err);
    }
}
