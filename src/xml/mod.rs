/*!
# XML corpus schema

Aligned pairs are serialized in a paginated tree:

```text
root
 └ FILE ID
    ├ meta (TITLE, VOLUME, AUTHOR, PERIOD, LANGUAGE, TRANSLATOR, SOURCE)
    └ SECT ID NAME
       └ PAGE ID          (at most [PAGE_SIZE] STC)
          └ STC ID
             ├ C          chinese
             └ V          vietnamese
```

The tree is built in [document] and written by [writer], [convert] deals with files and folders.
!*/
pub mod convert;
pub mod document;
pub mod writer;

pub use convert::{convert_aligned_file, convert_dir, convert_files};
pub use document::{build_document, clean_text, CorpusFile, PAGE_SIZE};
pub use writer::render;
