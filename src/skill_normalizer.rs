use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Skill alias → canonical form (O(1) lookup).
///
/// Covers the stack that actually shows up on Skylevel candidate profiles and
/// job posts. Unknown skills fall through unchanged (lowercased), so the table
/// only needs the names with common spelling variants.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // JavaScript ecosystem
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6", "es2015"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("nodejs", &["node.js", "node js", "nodejs", "node"]),
        (
            "react",
            &["reactjs", "react.js", "react js", "react", "react18", "react19"],
        ),
        ("nextjs", &["next.js", "nextjs", "next js"]),
        ("vue", &["vue.js", "vuejs", "vue js", "vue", "vue3"]),
        ("angular", &["angularjs", "angular.js", "angular", "angular2"]),
        // APIs and data access
        ("graphql", &["graph ql", "graphql", "apollo graphql"]),
        ("rest", &["rest api", "restful", "rest apis", "rest"]),
        ("prisma", &["prisma orm", "prisma.io", "prisma"]),
        // Styling
        ("css", &["css", "css3", "cascading style sheets"]),
        (
            "tailwind",
            &["tailwindcss", "tailwind css", "tailwind"],
        ),
        // Backend languages
        ("python", &["python", "python3", "py"]),
        ("java", &["java", "java8", "java11", "java17"]),
        ("csharp", &["c#", "csharp", "c sharp", "dotnet", ".net"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust", "rustlang", "rust lang"]),
        ("erlang", &["erlang", "erlang otp"]),
        ("elixir", &["elixir", "elixir lang", "phoenix elixir"]),
        // Databases
        (
            "postgresql",
            &["postgres", "postgresql", "postgre sql", "psql"],
        ),
        ("mysql", &["my sql", "mysql", "mysql8"]),
        ("mongodb", &["mongo", "mongodb", "mongo db"]),
        ("redis", &["redis", "redis cache"]),
        // Cloud and infrastructure
        ("aws", &["aws", "amazon web services", "amazon aws"]),
        ("gcp", &["gcp", "google cloud", "google cloud platform"]),
        ("azure", &["azure", "microsoft azure"]),
        ("docker", &["docker", "docker compose", "containers"]),
        (
            "kubernetes",
            &["k8s", "kubernetes", "kube", "k8s cluster"],
        ),
        ("terraform", &["terraform", "terraform cloud", "tf"]),
        // Tooling
        ("git", &["git", "github", "gitlab"]),
        ("figma", &["figma", "figma design"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Same table keyed by separator-stripped compact form, to absorb minor
/// punctuation/spacing variance ("Node.js" vs "node js" vs "nodejs").
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        let compact = compact_key(alias);
        if !compact.is_empty() {
            map.insert(compact, *canonical);
        }
    }
    map
});

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn split_segments(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(|c: char| matches!(c, ' ' | '/' | ',' | ';' | '|' | '+'))
        .map(nfkc_lower_trim)
        .filter(|s| !s.is_empty())
}

fn match_canonical_token(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some((*canonical).to_string());
    }

    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some((*canonical).to_string());
    }

    fuzzy_match_canonical(&compact)
}

fn fuzzy_match_canonical(compact: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        // Short tokens ("go", "java", "rust") are only matched exactly;
        // fuzzy-matching them produces false positives on brief inputs.
        if alias.len() < 5 || compact.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some((*canonical).to_string());
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        // Equal-distance ties break on canonical name, so an ambiguous typo
        // resolves the same way in every process regardless of map order.
        let better = match best {
            None => true,
            Some((best_canonical, best_dist)) => {
                distance < best_dist || (distance == best_dist && *canonical < best_canonical)
            }
        };
        if better {
            best = Some((*canonical, distance));
        }
    }

    best.map(|(canonical, _)| canonical.to_string())
}

/// Normalize one skill tag to its canonical form. Unknown skills come back
/// NFKC-folded and lowercased so case never affects matching.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = nfkc_lower_trim(skill);
    if normalized.is_empty() {
        return normalized;
    }

    if let Some(canonical) = match_canonical_token(&normalized) {
        return canonical;
    }

    // "Python/Django" style compound tags: take the first segment we know.
    for segment in split_segments(skill) {
        if let Some(canonical) = match_canonical_token(&segment) {
            return canonical;
        }
    }

    normalized
}

/// Normalize a skill list into a canonical set (dedupes aliases).
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}
