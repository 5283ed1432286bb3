use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct CommandLineConfig {
    pub graph: String,
    pub vertices: usize,
    pub titles: Option<String>,
    pub command: String,
    pub seeds: Vec<i64>,
    pub bound: u32,
    pub target: Option<i64>,
    pub from: Option<i64>,
    pub format: String,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut graph = String::new();
        let mut vertices = 0_usize;
        let mut titles = None;
        let mut command = String::from("status");
        let mut seeds = Vec::new();
        let mut bound = 0_u32;
        let mut target = None;
        let mut from = None;
        let mut format = String::from("text");
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--graph" => graph = next_value(iter.next(), "--graph")?,
                "--vertices" => vertices = parse_value(iter.next(), "--vertices")?,
                "--titles" => titles = Some(next_value(iter.next(), "--titles")?),
                "--command" => command = next_value(iter.next(), "--command")?,
                "--seeds" => seeds = parse_seeds(&next_value(iter.next(), "--seeds")?)?,
                "--bound" => bound = parse_value(iter.next(), "--bound")?,
                "--target" => target = Some(parse_value(iter.next(), "--target")?),
                "--from" => from = Some(parse_value(iter.next(), "--from")?),
                "--format" => format = next_value(iter.next(), "--format")?,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                }
            }
        }
        if graph.is_empty() {
            return Err("--graph is required".to_string());
        }
        if vertices == 0 {
            return Err("--vertices must be positive".to_string());
        }
        match format.as_str() {
            "text" | "json" => {}
            other => return Err(format!("unsupported format {other}")),
        }
        Ok(Self {
            graph,
            vertices,
            titles,
            command,
            seeds,
            bound,
            target,
            from,
            format,
        })
    }

    pub fn help() -> &'static str {
        "Usage: linkgraph --graph PATH --vertices N [--titles PATH] [--format text|json]\n\
         \x20 [--command status|trim|centrality|predecessors|path]\n\
         \x20 trim: --seeds 1,2,3 --bound K\n\
         \x20 predecessors: --target ID\n\
         \x20 path: --from ID --target ID\n"
    }
}

fn next_value(value: Option<&&str>, flag: &str) -> Result<String, String> {
    value
        .map(|v| v.to_string())
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_value<T: FromStr>(value: Option<&&str>, flag: &str) -> Result<T, String> {
    let raw = next_value(value, flag)?;
    raw.parse::<T>()
        .map_err(|_| format!("{flag} expects a number, got {raw}"))
}

fn parse_seeds(raw: &str) -> Result<Vec<i64>, String> {
    raw.split(',')
        .map(|field| {
            field
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("--seeds expects comma-separated IDs, got {raw}"))
        })
        .collect()
}
