// Copyright 2025 the oc-utils authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use oc_utils::cli::{commands::Commands, CliArgs};
use oc_utils::domain::config::{Environment, ToolConf};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = CliArgs::parse();
    let conf = ToolConf::load(args.config.as_deref())?;
    let environment = Environment::from_flag(args.prod);

    match args.command {
        Commands::ScaleUp(cmd) => cmd.execute(environment, &conf).await,
        Commands::ScaleDown(cmd) => cmd.execute(environment, &conf).await,
        Commands::RestartPods(cmd) => cmd.execute(environment, &conf).await,
    }
}
