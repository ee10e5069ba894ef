//! `gm docker` -- write a starter `Dockerfile` for a Node project.

use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use crate::context::RuntimeContext;
use crate::output::display_feedback;

pub const DOCKERFILE: &str = "Dockerfile";

const TEMPLATE: &str = r#"FROM node:14

WORKDIR /app

COPY package*.json ./

RUN npm install

COPY . .

EXPOSE 3000

CMD [ "npm", "start" ]"#;

/// Execute the `gm docker` command. An existing `Dockerfile` is overwritten.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let path = ctx.path(DOCKERFILE);
    debug!(path = %path.display(), "writing Dockerfile");
    fs::write(&path, TEMPLATE).with_context(|| format!("failed to write {}", path.display()))?;
    display_feedback(&format!("File created: {DOCKERFILE}"));
    display_feedback("Dockerfile created successfully.");
    Ok(())
}
