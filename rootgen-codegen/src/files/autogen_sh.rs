use rootgen_core::GeneratedFile;

/// `autogen.sh`: runs the autotools bootstrap chain, then `configure`.
pub struct AutogenSh;

impl GeneratedFile for AutogenSh {
    fn name(&self) -> String {
        "autogen".to_string()
    }

    fn lines(&self) -> Vec<String> {
        [
            "#!/bin/sh",
            "srcdir=`dirname $0`",
            "test -z \"$srcdir\" && srcdir=.",
            "",
            "(cd $srcdir; aclocal -I /usr/share;\\",
            "libtoolize --force; automake -a --add-missing; autoconf)",
            "",
            "$srcdir/configure  \"$@\"",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
