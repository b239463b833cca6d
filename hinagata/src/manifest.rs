use crate::spec::{Preset, ProjectSpec};
use indexmap::IndexMap;
use serde::Serialize;

/// `package.json` as emitted for a generated project. Field order is the
/// order npm itself writes them in, which serde preserves.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
    main: &'static str,
    scripts: IndexMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'static str>,
    dependencies: IndexMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dev_dependencies: Option<IndexMap<&'static str, &'static str>>,
}

const RUNTIME_DEPENDENCIES: [(&str, &str); 3] = [
    ("express", "^5.1.0"),
    ("cors", "^2.8.5"),
    ("dotenv", "^17.2.1"),
];

const AUTH_DEPENDENCIES: [(&str, &str); 2] = [("jsonwebtoken", "^9.0.0"), ("bcryptjs", "^2.4.3")];

const TYPESCRIPT_TOOLING: [(&str, &str); 3] = [
    ("nodemon", "^3.1.10"),
    ("ts-node", "^10.9.2"),
    ("typescript", "^5.9.2"),
];

fn typings(preset: Preset) -> Vec<(&'static str, &'static str)> {
    let mut typings = vec![
        ("@types/express", "^5.0.3"),
        ("@types/cors", "^2.8.19"),
        ("@types/node", "^24.1.0"),
    ];

    if preset == Preset::Full {
        typings.push(("@types/jsonwebtoken", "^9.0.0"));
        typings.push(("@types/bcryptjs", "^2.4.0"));
    }

    typings
}

fn build(spec: &ProjectSpec) -> PackageManifest<'_> {
    let typescript = spec.language.is_typescript();
    let full = spec.preset == Preset::Full;

    let mut scripts = IndexMap::new();
    if full {
        scripts.insert("test", "echo \"Error: no test specified\" && exit 1");
    }
    if typescript {
        scripts.insert("start", "node dist/index.js");
        scripts.insert("dev", "nodemon");
        scripts.insert("build", "tsc");
    } else {
        scripts.insert("start", "node index.js");
        scripts.insert("dev", "nodemon index.js");
    }

    let mut dependencies: IndexMap<_, _> = RUNTIME_DEPENDENCIES.into_iter().collect();
    if full {
        dependencies.extend(AUTH_DEPENDENCIES);
    }

    let dev_dependencies = if typescript {
        let mut dev: IndexMap<_, _> = typings(spec.preset).into_iter().collect();
        dev.extend(TYPESCRIPT_TOOLING);
        Some(dev)
    } else if full {
        // the javascript dev script still relies on nodemon
        Some(IndexMap::from([("nodemon", "^3.1.10")]))
    } else {
        None
    };

    PackageManifest {
        name: &spec.name,
        version: "1.0.0",
        description: full.then_some(""),
        main: if typescript { "dist/index.js" } else { "index.js" },
        scripts,
        keywords: full.then(Vec::new),
        author: full.then_some(""),
        license: full.then_some("ISC"),
        dependencies,
        dev_dependencies,
    }
}

/// Serializes the manifest for `spec` as pretty JSON with a trailing newline.
pub(crate) fn render(spec: &ProjectSpec) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(&build(spec))?;
    json.push('\n');

    Ok(json)
}
