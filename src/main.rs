mod cli;

use std::io::IsTerminal;

use anyhow::Context;
use catfilter::context::AppContext;
use catfilter::render::{render_panel, render_table, Style};
use catfilter::repl::{self, ReplOptions};
use catfilter::session::{Preset, Session};
use catfilter::sort::SortOrder;
use clap::Parser;
use cli::{Args, Command, ShowArgs};

fn show(ctx: &AppContext, style: Style, args: ShowArgs) -> anyhow::Result<()> {
    let preset = Preset {
        user: args.user,
        query: args.query,
        categories: args.categories,
        sort: args.sort.map(|column| {
            if args.desc {
                SortOrder::desc(column)
            } else {
                SortOrder::asc(column)
            }
        }),
    };
    let mut session = Session::new(&ctx.catalog);
    let listing = session.apply_preset(preset);

    if args.panel {
        print!("{}", render_panel(&ctx.catalog, session.state()));
    }
    print!("{}", render_table(&listing, session.state(), style));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(ref path) => Some(
            path.to_str()
                .with_context(|| format!("Config path {path:?} is not valid UTF-8"))?
                .to_owned(),
        ),
        None => std::env::var("CATFILTER_CONFIG_FILE").ok(),
    };
    let ctx = AppContext::load(config_path.as_deref(), args.data.as_deref())?;

    let stdout = std::io::stdout();
    let style = Style {
        color: args
            .color
            .unwrap_or(ctx.config.color)
            .use_color(stdout.is_terminal()),
    };

    match args.command.unwrap_or(Command::Interactive) {
        Command::Show(show_args) => show(&ctx, style, show_args)?,
        Command::Interactive => {
            let stdin = std::io::stdin();
            let options = ReplOptions {
                style,
                show_panel: ctx.config.show_panel,
                prompt: stdin.is_terminal(),
            };
            if options.prompt {
                print!("{}", repl::HELP);
            }
            repl::run(&ctx.catalog, stdin.lock(), stdout.lock(), &options)?;
        }
    }

    Ok(())
}
