use std::fmt;

#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Type {
    Arrow { from: Box<Type>, to: Box<Type> },

    Bool,
}

impl Type {
    pub fn arrow(from: Type, to: Type) -> Self {
        Self::Arrow {
            from: Box::new(from),
            to: Box::new(to),
        }
    }

    fn write_display(&self, w: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Arrow { from, to } => {
                if matches!(**from, Type::Arrow { .. }) {
                    w.write_str("(")?;
                    from.write_display(w)?;
                    w.write_str(") -> ")?;
                } else {
                    from.write_display(w)?;
                    w.write_str(" -> ")?;
                }
                to.write_display(w)
            }
            Type::Bool => w.write_str("Bool"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_display(f)
    }
}
