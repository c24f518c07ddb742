/*
Generates the opcode constants, the value -> name table and the name -> value
lookup from a single list, so the three can never disagree.

```
opcode_list! {
    opcode OpName<value> "OP_NAME"
    ...
    alias OpAlias = OpName "OP_ALIAS"
    ...
}
```
*/
macro_rules! opcode_list {
    (
        $( opcode $name:ident<$num:literal> $text:literal )*
        $( alias $alias:ident = $target:ident $alias_text:literal )*
    ) => {
        pub mod codes {
            $(
                #[allow(non_upper_case_globals)]
                pub const $name: u8 = $num;
            )*
            $(
                #[allow(non_upper_case_globals)]
                pub const $alias: u8 = $target;
            )*
        }

        /// Canonical name of every opcode, indexed by opcode value.
        pub const OPCODE_NAMES: [&str; 256] = {
            let mut names = [""; 256];
            $(
                names[$num] = $text;
            )*
            names
        };

        /// Resolves a canonical or alias opcode name to its value.
        pub fn opcode_from_name(name: &str) -> Option<u8> {
            match name {
                $(
                    $text => Some($num),
                )*
                $(
                    $alias_text => Some(codes::$target),
                )*
                _ => None,
            }
        }
    };
}
