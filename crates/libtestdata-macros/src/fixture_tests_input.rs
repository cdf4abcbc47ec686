use libtestdata_core::FixtureSuite;
use libtestdata_core::MatchPatternSpec;
use syn::Ident;
use syn::LitBool;
use syn::LitStr;
use syn::Token;
use syn::bracketed;
use syn::parse::Parse;
use syn::parse::ParseStream;
use syn::punctuated::Punctuated;

/// Parsed arguments of `fixture_tests! { .. }`.
///
/// ```text
/// fixture_tests! {
///     root: "testData/firLoadK2Compiled",
///     pattern: r"^(.+)\.kt$",
///     runner: run_test,
///     exclude: ["notYetWired.kt"],           // optional
///     exclude_pattern: r"\.fir\.kt$",        // optional
///     recursive: true,                       // optional, default true
///     target_backend: "JVM_IR",              // optional
/// }
/// ```
pub(crate) struct FixtureTestsInput {
    pub root: LitStr,
    pub pattern: LitStr,
    pub runner: syn::Path,
    pub exclude: Vec<LitStr>,
    pub exclude_pattern: Option<LitStr>,
    pub recursive: Option<LitBool>,
    pub target_backend: Option<LitStr>,
}
impl FixtureTestsInput {
    /// The suite definition shared by the generated tests and the generated
    /// completeness guard.
    pub fn suite(&self) -> FixtureSuite {
        let mut pattern = MatchPatternSpec::new(self.pattern.value());
        for excluded in &self.exclude {
            pattern = pattern.exclude_path(excluded.value());
        }
        if let Some(exclude_pattern) = &self.exclude_pattern {
            pattern = pattern.exclude_pattern(exclude_pattern.value());
        }
        if let Some(recursive) = &self.recursive {
            pattern = pattern.recursive(recursive.value);
        }
        if let Some(target_backend) = &self.target_backend {
            pattern = pattern.target_backend(target_backend.value());
        }

        FixtureSuite::new(self.root.value(), pattern)
    }
}

impl Parse for FixtureTestsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut root: Option<LitStr> = None;
        let mut pattern: Option<LitStr> = None;
        let mut runner: Option<syn::Path> = None;
        let mut exclude: Option<Vec<LitStr>> = None;
        let mut exclude_pattern: Option<LitStr> = None;
        let mut recursive: Option<LitBool> = None;
        let mut target_backend: Option<LitStr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![:]>()?;

            match key.to_string().as_str() {
                "root" => set_once(&mut root, &key, input.parse()?)?,
                "pattern" => set_once(&mut pattern, &key, input.parse()?)?,
                "runner" => set_once(&mut runner, &key, input.parse()?)?,
                "exclude" => {
                    let content;
                    bracketed!(content in input);
                    let paths = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    set_once(&mut exclude, &key, paths.into_iter().collect())?
                },
                "exclude_pattern" => set_once(&mut exclude_pattern, &key, input.parse()?)?,
                "recursive" => set_once(&mut recursive, &key, input.parse()?)?,
                "target_backend" => set_once(&mut target_backend, &key, input.parse()?)?,
                other => return Err(syn::Error::new(
                    key.span(),
                    format!(
                        "Unknown `fixture_tests!` argument `{other}`. Expected one of: \
                        `root`, `pattern`, `runner`, `exclude`, `exclude_pattern`, \
                        `recursive`, `target_backend`."
                    ),
                )),
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(Self {
            root: root.ok_or_else(|| missing_argument(input, "root"))?,
            pattern: pattern.ok_or_else(|| missing_argument(input, "pattern"))?,
            runner: runner.ok_or_else(|| missing_argument(input, "runner"))?,
            exclude: exclude.unwrap_or_default(),
            exclude_pattern,
            recursive,
            target_backend,
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, key: &Ident, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            key.span(),
            format!("`fixture_tests!` argument `{key}` was specified more than once"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

fn missing_argument(input: ParseStream, name: &str) -> syn::Error {
    input.error(format!("`fixture_tests!` is missing required argument `{name}`"))
}
