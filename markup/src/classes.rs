/// Add `token` to a space-separated class list unless it already occurs as a
/// whole word; a substring inside a longer class name does not count. An
/// empty list becomes `token` alone, an empty token is a no-op.
pub fn add_class(class_list: &str, token: &str) -> String {
    if token.is_empty() || has_class(class_list, token) {
        return class_list.to_string();
    }
    if class_list.is_empty() {
        return token.to_string();
    }
    format!("{class_list} {token}")
}

/// Drop every token exactly equal to `token`, keeping the relative order of
/// the rest. An empty list is returned unchanged.
pub fn remove_class(class_list: &str, token: &str) -> String {
    if class_list.is_empty() {
        return class_list.to_string();
    }
    class_list
        .split(' ')
        .filter(|name| *name != token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_class(class_list: &str, token: &str) -> bool {
    class_list.split(' ').any(|name| name == token)
}

#[cfg(test)]
#[test]
fn test_add_class() {
    assert_eq!(add_class("", "testclass"), "testclass");
    assert_eq!(add_class("already has classes", "testclass"), "already has classes testclass");
    assert_eq!(add_class("testclass", "testclass"), "testclass");
    assert_eq!(add_class("testclass and more classes", "testclass"), "testclass and more classes");
    assert_eq!(add_class("more classes with testclass", "testclass"), "more classes with testclass");
    assert_eq!(
        add_class("more classes and testclass within", "testclass"),
        "more classes and testclass within"
    );
}

#[cfg(test)]
#[test]
fn test_add_class_ignores_substrings() {
    assert_eq!(
        add_class("more classes and testclassSuper within", "testclass"),
        "more classes and testclassSuper within testclass"
    );
    assert_eq!(
        add_class("more classes and Supertestclass within", "testclass"),
        "more classes and Supertestclass within testclass"
    );
    assert_eq!(
        add_class("more classes and SupertestclassSuper within", "testclass"),
        "more classes and SupertestclassSuper within testclass"
    );
}

#[cfg(test)]
#[test]
fn test_add_class_idempotent() {
    let once = add_class("some classes", "testclass");
    assert_eq!(add_class(&once, "testclass"), once);
}

#[cfg(test)]
#[test]
fn test_remove_class() {
    assert_eq!(remove_class("testclass", "testclass"), "");
    assert_eq!(remove_class("already has classes testclass", "testclass"), "already has classes");
    assert_eq!(remove_class("testclass already has classes", "testclass"), "already has classes");
    assert_eq!(
        remove_class("testclassalready has testclass classes", "testclass"),
        "testclassalready has classes"
    );
    assert_eq!(remove_class("test", "testclass"), "test");
    assert_eq!(remove_class("", "testclass"), "");
}

#[cfg(test)]
#[test]
fn test_remove_class_idempotent() {
    let once = remove_class("a testclass b", "testclass");
    assert_eq!(remove_class(&once, "testclass"), once);
}
