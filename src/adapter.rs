// Adapter Pattern - a titled book used where a named thing is expected
// The existing `Book` type is left untouched; the adapter translates
// `title()` into the `name()` that new code asks for.

use std::io::{self, Write};

// ============================================================================
// Existing type with an incompatible interface
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Anything that already knows its title.
pub trait Titled {
    fn title(&self) -> &str;
}

impl Titled for Book {
    fn title(&self) -> &str {
        Book::title(self)
    }
}

// ============================================================================
// Target interface and adapter
// ============================================================================

/// What new code expects.
pub trait Named {
    fn name(&self) -> String;
}

/// Adapts any [`Titled`] value to [`Named`].
///
/// Generic over the adaptee, so adapting a concrete `Book` costs nothing at
/// runtime; `BookAdapter<Box<dyn Titled>>` works for mixed collections.
#[derive(Debug, Clone)]
pub struct BookAdapter<T = Book> {
    book: T,
}

impl<T: Titled> BookAdapter<T> {
    pub fn new(book: T) -> Self {
        Self { book }
    }

    pub fn into_inner(self) -> T {
        self.book
    }
}

impl<T: Titled + ?Sized> Titled for Box<T> {
    fn title(&self) -> &str {
        (**self).title()
    }
}

impl<T: Titled> Named for BookAdapter<T> {
    fn name(&self) -> String {
        self.book.title().to_string()
    }
}

pub fn print_name(item: &dyn Named, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", item.name())
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    let book = Book::new("Design Patterns: Elements of Reusable Object-Oriented Software");
    let adapter = BookAdapter::new(book);
    print_name(&adapter, out)
}

// ============================================================================
// Tests
// ============================================================================
