/// Usage banners printed (to stdout) whenever the arguments are wrong.

pub const EXTRACT_USAGE: &str = "\
====================================================
extract-package
---------------
   Generates a distributable package from the
   current source tree.

   Usage: extract-package <TAG> <TARGETDIR>
     <TAG> = ( lic_gpl | lic_com )
     <TARGETDIR> = the new base directory
====================================================
";

pub const MISSING_KEYWORDS_USAGE: &str = "\
====================================================
find-missing-keywords
---------------------
   Lists files below include/ and src/ that have no
   svn:keywords property.

   Usage: find-missing-keywords
====================================================
";

pub const MISSING_LICENSE_USAGE: &str = "\
====================================================
find-missing-license
--------------------
   Lists files below the current directory that have
   none of the lic_gpl, lic_com or lic_no properties.

   Usage: find-missing-license
====================================================
";
