//! Lua sandbox for lobby settings scripts.
//!
//! Settings scripts ship with maps and are not trusted: they may only
//! compute values and call the `rttr` API. File, process and C module access
//! is removed; `os` keeps only its clock functions.

use mlua::prelude::*;

/// Apply sandbox restrictions to the Lua VM.
///
/// Removes:
/// - `package.loadlib`, `package.cpath`, `package.path`: no module loading from disk
/// - `io`, `dofile`, `loadfile`: no file access
/// - every `os` function except `time`, `clock` and `date`
pub fn apply_sandbox(lua: &Lua) -> LuaResult<()> {
    lua.load(
        r#"
        package.loadlib = nil
        package.cpath = ''
        package.path = ''
        io = nil
        dofile = nil
        loadfile = nil
        local time, clock, date = os.time, os.clock, os.date
        os = { time = time, clock = clock, date = date }
    "#,
    )
    .set_name("sandbox")
    .exec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sandboxed() -> Lua {
        let lua = Lua::new();
        apply_sandbox(&lua).unwrap();
        lua
    }

    #[test]
    fn test_sandbox_blocks_loadlib() {
        let lua = sandboxed();
        let result: LuaValue = lua
            .globals()
            .get::<LuaTable>("package")
            .unwrap()
            .get("loadlib")
            .unwrap();
        assert_eq!(result, LuaValue::Nil);
    }

    #[test]
    fn test_sandbox_removes_file_access() {
        let lua = sandboxed();
        for name in ["io", "dofile", "loadfile"] {
            let value: LuaValue = lua.globals().get(name).unwrap();
            assert_eq!(value, LuaValue::Nil, "{} should be removed", name);
        }
    }

    #[test]
    fn test_sandbox_restricts_os() {
        let lua = sandboxed();
        let has_execute: bool = lua.load("os.execute ~= nil").eval().unwrap();
        assert!(!has_execute);
        let has_time: bool = lua.load("type(os.time()) == 'number'").eval().unwrap();
        assert!(has_time);
    }

    #[test]
    fn test_sandbox_preserves_standard_libs() {
        let lua = sandboxed();

        let result: String = lua.load("string.upper('hello')").eval().unwrap();
        assert_eq!(result, "HELLO");

        let result: String = lua
            .load("table.concat({'a', 'b', 'c'}, ', ')")
            .eval()
            .unwrap();
        assert_eq!(result, "a, b, c");
    }

    #[test]
    fn test_sandbox_require_fails_without_crashing() {
        let lua = sandboxed();
        let (ok, _msg): (bool, String) = lua
            .load("return pcall(require, 'nonexistent')")
            .eval()
            .unwrap();
        assert!(!ok);
    }
}
