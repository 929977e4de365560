pub const DEFAULT_PROFILE: &str = "default";

const MAX_BUS_NAME_LEN: usize = 255;

/// A profile name doubles as a bus-name element and an object-path element,
/// so it is only accepted when both prefixed forms are well formed.
pub fn profile_name_valid(name: &str) -> bool {
    bus_name_valid(&format!("com.{name}")) && object_path_valid(&format!("/{name}"))
}

pub fn bus_name_valid(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_BUS_NAME_LEN {
        return false;
    }

    let (unique, body) = match name.strip_prefix(':') {
        Some(rest) => (true, rest),
        None => (false, name),
    };

    let elements: Vec<&str> = body.split('.').collect();
    if elements.len() < 2 {
        return false;
    }

    elements.iter().all(|element| {
        let mut chars = element.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !unique && first.is_ascii_digit() {
            return false;
        }
        element
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    })
}

pub fn object_path_valid(path: &str) -> bool {
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }

    rest.split('/').all(|element| {
        !element.is_empty()
            && element
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}
