use std::env;
use std::path::PathBuf;
use tipagens::{run, CliOptions, Command, Type};

fn usage() -> ! {
    eprintln!(
        "Usage: tipagens <command> [options]\n\
\n\
  load [--chart PATH] [--reject TYPE]...   register every row and print the result\n\
  lookup ATTACKER DEFENDER [DEFENDER...]   print the combined multiplier\n\
  generate [--dir DIR] [--output PATH]     build a chart from per-type JSON files\n\
  check [--chart PATH]                     validate a chart file"
    );
    std::process::exit(1);
}

fn parse_type(val: &str) -> anyhow::Result<Type> {
    Ok(val.parse()?)
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut args = env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("load") => {
            let mut chart_path = None;
            let mut reject = Vec::new();
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--chart" => {
                        chart_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                            anyhow::anyhow!("--chart requires a path (e.g. --chart tipagens.json)")
                        })?);
                    }
                    "--reject" => {
                        let val = args
                            .next()
                            .ok_or_else(|| anyhow::anyhow!("--reject requires a type name"))?;
                        reject.push(parse_type(&val)?);
                    }
                    "--help" | "-h" => usage(),
                    other => anyhow::bail!("Unknown argument {other}"),
                }
            }
            Command::Load { chart_path, reject }
        }
        Some("lookup") => {
            let attacking = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("lookup requires an attacking type"))?;
            let defenders = args
                .map(|val| parse_type(&val))
                .collect::<anyhow::Result<Vec<_>>>()?;
            if defenders.is_empty() {
                anyhow::bail!("lookup requires at least one defending type");
            }
            Command::Lookup {
                attacking: parse_type(&attacking)?,
                defenders,
            }
        }
        Some("generate") => {
            let mut dir = PathBuf::from("tipagens");
            let mut output = PathBuf::from("tipagens.json");
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--dir" => {
                        dir = args
                            .next()
                            .map(PathBuf::from)
                            .ok_or_else(|| anyhow::anyhow!("--dir requires a directory"))?;
                    }
                    "--output" => {
                        output = args.next().map(PathBuf::from).ok_or_else(|| {
                            anyhow::anyhow!("--output requires a path (e.g. --output tipagens.json)")
                        })?;
                    }
                    "--help" | "-h" => usage(),
                    other => anyhow::bail!("Unknown argument {other}"),
                }
            }
            Command::Generate { dir, output }
        }
        Some("check") => {
            let mut chart_path = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--chart" => {
                        chart_path = Some(
                            args.next()
                                .map(PathBuf::from)
                                .ok_or_else(|| anyhow::anyhow!("--chart requires a path"))?,
                        );
                    }
                    "--help" | "-h" => usage(),
                    other => anyhow::bail!("Unknown argument {other}"),
                }
            }
            Command::Check { chart_path }
        }
        Some("--help") | Some("-h") | None => usage(),
        Some(other) => anyhow::bail!("Unknown command {other}"),
    };
    Ok(CliOptions { command })
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let opts = parse_args()?;
    run(opts)
}
