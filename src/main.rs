//! apiref — render versioned API reference entries from pre-parsed content.
//!
//! - `apiref render -c content.json 'streamlit.*'` renders entries
//! - `apiref switch -c content.json -s streamlit.button --slug button --to 1.20.0`
//!   prints where a version switch navigates
//! - `apiref versions -c content.json` lists the selector options

use anyhow::{bail, Context, Result};
use apiref::render;
use apiref::slug::parse_slug;
use apiref::version::version_label;
use apiref::{EntryPage, Library, RenderOptions, SiteConfig};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "apiref",
    about = "Render versioned API reference entries and compute version-switch routes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ContentArgs {
    /// Content JSON: {"versions": [...], "symbols": {version: {name: descriptor}}}
    #[arg(short = 'c', long)]
    content: PathBuf,

    /// Library name used in notices
    #[arg(long, default_value = "Streamlit")]
    library_name: String,

    /// Module path used in symbol names and signatures
    #[arg(long, default_value = "streamlit")]
    module: String,

    /// Alias the module is shown as
    #[arg(long, default_value = "st")]
    alias: String,
}

impl ContentArgs {
    fn site(&self) -> SiteConfig {
        SiteConfig {
            library_name: self.library_name.clone(),
            module: self.module.clone(),
            alias: self.alias.clone(),
            ..SiteConfig::default()
        }
    }

    fn load(&self) -> Result<Library> {
        Library::load(&self.content)
            .with_context(|| format!("failed to load content from {}", self.content.display()))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render entries for symbols matching the given glob patterns
    Render {
        #[command(flatten)]
        content: ContentArgs,

        /// Symbol names or glob patterns, e.g. 'streamlit.*'
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Version to render (default: latest)
        #[arg(short = 'V', long)]
        version: Option<String>,

        /// Route of the page, e.g. 1.20.0/develop/button (default: derived from the symbol)
        #[arg(long)]
        slug: Option<String>,

        /// Output format: markdown (default), html, json
        #[arg(short = 'f', long, default_value = "markdown")]
        format: String,

        /// Output directory (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Prefix template file or directory containing _prefix.mdx.
        /// Supports ${name} substitution.
        #[arg(short = 'p', long)]
        prefix: Option<String>,

        /// Omit the header, deprecation notice and description
        #[arg(long)]
        hide_header: bool,

        /// Deprecation notice (rich text) shown under the header
        #[arg(long)]
        deprecated: Option<String>,
    },
    /// Print the route reached by switching an entry to another version
    Switch {
        #[command(flatten)]
        content: ContentArgs,

        /// Symbol name, e.g. streamlit.button
        #[arg(short = 's', long)]
        symbol: String,

        /// Current route, e.g. 1.20.0/button
        #[arg(long)]
        slug: String,

        /// Version currently shown (default: latest)
        #[arg(long)]
        from: Option<String>,

        /// Version selected
        #[arg(long)]
        to: String,
    },
    /// List selector options, newest first
    Versions {
        #[command(flatten)]
        content: ContentArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            content,
            symbols,
            version,
            slug,
            format,
            output,
            prefix,
            hide_header,
            deprecated,
        } => {
            let library = content.load()?;
            let site = content.site();
            let version = checked_version(&library, version.as_deref())?;
            let request = RenderRequest {
                library: &library,
                site: &site,
                version: &version,
                slug: slug.as_deref(),
                options: RenderOptions {
                    hide_header,
                    deprecation: deprecated,
                },
                format: &format,
            };
            let names = select_symbols(&library, &version, &symbols)?;
            match output {
                Some(dir) => file_mode(&request, &names, &dir, prefix.as_deref()),
                None => stdout_mode(&request, &names),
            }
        }
        Commands::Switch {
            content,
            symbol,
            slug,
            from,
            to,
        } => {
            let library = content.load()?;
            let site = content.site();
            let from = checked_version(&library, from.as_deref())?;
            let to = checked_version(&library, Some(to.as_str()))?;
            let mut page = EntryPage::new(
                &library,
                &site,
                &symbol,
                Some(from.as_str()),
                parse_slug(&slug),
                RenderOptions::default(),
            );
            page.load();
            match page.select_version(&to) {
                Some(route) => println!("{}", route),
                None => println!("unchanged"),
            }
            Ok(())
        }
        Commands::Versions { content } => {
            let library = content.load()?;
            let site = content.site();
            for version in library.versions().newest_first() {
                println!("{}\t{}", version, version_label(&version, &site));
            }
            Ok(())
        }
    }
}

/// Everything shared by the entries of one `render` invocation.
struct RenderRequest<'a> {
    library: &'a Library,
    site: &'a SiteConfig,
    version: &'a str,
    slug: Option<&'a str>,
    options: RenderOptions,
    format: &'a str,
}

impl RenderRequest<'_> {
    fn render(&self, renderer: &dyn render::Renderer, symbol: &str) -> Result<String> {
        let slug = match self.slug {
            Some(path) => parse_slug(path),
            None => default_slug(symbol, self.version, self.library, self.site),
        };
        let mut page = EntryPage::new(
            self.library,
            self.site,
            symbol,
            Some(self.version),
            slug,
            self.options.clone(),
        );
        renderer
            .render(page.load())
            .with_context(|| format!("failed to render {}", symbol))
    }
}

fn checked_version(library: &Library, version: Option<&str>) -> Result<String> {
    match version {
        Some(v) if !library.versions().contains(v) => bail!("unknown version: {}", v),
        Some(v) => Ok(v.to_string()),
        None => Ok(library.versions().latest().to_string()),
    }
}

/// Expand symbol patterns against the table at `version`.
///
/// A literal name is kept even when absent so its entry renders the
/// not-available notice.
fn select_symbols(library: &Library, version: &str, patterns: &[String]) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for pattern in patterns {
        let is_literal = glob::Pattern::escape(pattern) == *pattern;
        if is_literal {
            names.push(pattern.clone());
            continue;
        }
        let matcher = glob::Pattern::new(pattern)
            .with_context(|| format!("invalid symbol pattern: {}", pattern))?;
        let matches: Vec<String> = library
            .table(version)
            .into_iter()
            .flat_map(|table| table.keys())
            .filter(|name| matcher.matches(name))
            .cloned()
            .collect();
        if matches.is_empty() {
            warn!("no symbols matched {} at version {}", pattern, version);
        }
        names.extend(matches);
    }
    let mut seen = std::collections::HashSet::new();
    names.retain(|n| seen.insert(n.clone()));
    Ok(names)
}

/// Route of an entry page: the aliased name without its module prefix,
/// behind a version segment unless the version is the latest.
fn default_slug(symbol: &str, version: &str, library: &Library, site: &SiteConfig) -> Vec<String> {
    let aliased = site.aliased(symbol);
    let page = aliased
        .strip_prefix(&format!("{}.", site.alias))
        .unwrap_or(&aliased)
        .to_string();
    if version == library.versions().latest() {
        vec![page]
    } else {
        vec![version.to_string(), page]
    }
}

/// stdout mode: every entry printed in turn.
fn stdout_mode(request: &RenderRequest, names: &[String]) -> Result<()> {
    let renderer = render::create_renderer(request.format)?;
    for name in names {
        print!("{}", request.render(renderer.as_ref(), name)?);
    }
    Ok(())
}

/// file mode: one file per entry in the output directory.
fn file_mode(request: &RenderRequest, names: &[String], output_dir: &Path, prefix: Option<&str>) -> Result<()> {
    let renderer = render::create_renderer(request.format)?;
    let ext = renderer.file_extension();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let prefix_template = resolve_prefix(prefix, output_dir)?;

    for name in names {
        let file_name = request.site.aliased(name);
        let out_path = output_dir.join(format!("{}.{}", file_name, ext));

        let mut output = String::new();
        if let Some(ref tpl) = prefix_template {
            output.push_str(&tpl.replace("${name}", &file_name));
            output.push('\n');
        }
        output.push_str(&request.render(renderer.as_ref(), name)?);

        fs::write(&out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }
    Ok(())
}

/// Resolve the prefix template: an explicit file, a directory holding
/// `_prefix.mdx`, or `_prefix.mdx` in the output directory.
fn resolve_prefix(prefix_arg: Option<&str>, output_dir: &Path) -> Result<Option<String>> {
    match prefix_arg {
        Some(p) => {
            let path = Path::new(p);
            if path.is_file() {
                Ok(Some(fs::read_to_string(path).with_context(|| {
                    format!("failed to read prefix file: {}", path.display())
                })?))
            } else if path.is_dir() {
                let candidate = path.join("_prefix.mdx");
                if candidate.is_file() {
                    Ok(Some(fs::read_to_string(&candidate)?))
                } else {
                    Ok(None)
                }
            } else {
                bail!("prefix not found: {}", p);
            }
        }
        None => {
            let candidate = output_dir.join("_prefix.mdx");
            if candidate.is_file() {
                Ok(Some(fs::read_to_string(&candidate)?))
            } else {
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        Library::from_json(
            r#"{
                "versions": ["1.20.0", "1.30.0"],
                "symbols": {
                    "1.30.0": {
                        "streamlit.button": { "name": "button" },
                        "streamlit.slider": { "name": "slider" },
                        "streamlit.column_config.Column": { "name": "Column" }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn default_slug_for_latest_and_older() {
        let lib = library();
        let site = SiteConfig::default();
        assert_eq!(default_slug("streamlit.button", "1.30.0", &lib, &site), ["button"]);
        assert_eq!(
            default_slug("streamlit.button", "1.20.0", &lib, &site),
            ["1.20.0", "button"]
        );
        assert_eq!(
            default_slug("streamlit.column_config.Column", "1.30.0", &lib, &site),
            ["column_config.Column"]
        );
    }

    #[test]
    fn patterns_expand_against_table() {
        let lib = library();
        let names = select_symbols(
            &lib,
            "1.30.0",
            &["streamlit.b*".to_string(), "streamlit.*".to_string()],
        )
        .unwrap();
        assert_eq!(
            names,
            ["streamlit.button", "streamlit.column_config.Column", "streamlit.slider"]
        );
    }

    #[test]
    fn literal_names_are_kept_when_absent() {
        let lib = library();
        let names = select_symbols(&lib, "1.20.0", &["streamlit.button".to_string()]).unwrap();
        assert_eq!(names, ["streamlit.button"]);
        assert!(select_symbols(&lib, "1.20.0", &["streamlit.*".to_string()])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn checked_version_rejects_unknown() {
        let lib = library();
        assert_eq!(checked_version(&lib, None).unwrap(), "1.30.0");
        assert!(checked_version(&lib, Some("9.9.9")).is_err());
    }
}
