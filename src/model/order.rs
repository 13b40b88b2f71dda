use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A named command sent from the controller to the worker.
///
/// Two orders are equal when their names are equal; parameters are positional
/// payload and do not take part in the comparison.
#[derive(Debug, Clone)]
pub struct Order {
    pub name: String,
    pub params: Vec<String>,
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Arguments
    /// * `name` - Command name, resolved against the worker's registry
    /// * `params` - Positional parameters, possibly empty
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// The argument a handler receives for this order.
    ///
    /// A single parameter is unwrapped to a scalar; zero or two-plus are not.
    pub fn argument(&self) -> OrderArg {
        OrderArg::from(self.params.clone())
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Order {}

/// Handler input derived from an order's parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderArg {
    None,
    Scalar(String),
    List(Vec<String>),
}

impl From<Vec<String>> for OrderArg {
    fn from(mut params: Vec<String>) -> Self {
        match params.len() {
            0 => OrderArg::None,
            1 => OrderArg::Scalar(params.remove(0)),
            _ => OrderArg::List(params),
        }
    }
}

/// An order as written on the command line: `name` or `name:p1,p2,...`.
///
/// Parsing never fails. An empty name is carried through so the controller
/// can reject it, and an empty parameter section (`name:`) means no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub name: String,
    pub params: Vec<String>,
}

impl FromStr for OrderSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, params) = match s.split_once(':') {
            Some((name, "")) => (name, Vec::new()),
            Some((name, rest)) => (name, rest.split(',').map(str::to_string).collect()),
            None => (s, Vec::new()),
        };
        Ok(Self {
            name: name.to_string(),
            params,
        })
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.params.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_argument_unwraps_single_param() {
        assert_eq!(Order::new("ping", vec![]).argument(), OrderArg::None);
        assert_eq!(
            Order::new("reverse", strings(&["abc"])).argument(),
            OrderArg::Scalar("abc".into())
        );
        assert_eq!(
            Order::new("reverse", strings(&["a", "b"])).argument(),
            OrderArg::List(strings(&["a", "b"]))
        );
    }

    #[test]
    fn test_equality_is_by_name() {
        let a = Order::new("reverse", strings(&["abc"]));
        let b = Order::new("reverse", strings(&["xyz", "123"]));
        let c = Order::new("ping", strings(&["abc"]));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_parse_order_spec() {
        let bare: OrderSpec = "ping".parse().unwrap();
        assert_eq!(bare.name, "ping");
        assert!(bare.params.is_empty());

        let with_params: OrderSpec = "reverse:a,b,c".parse().unwrap();
        assert_eq!(with_params.name, "reverse");
        assert_eq!(with_params.params, strings(&["a", "b", "c"]));

        let trailing: OrderSpec = "show_results:".parse().unwrap();
        assert_eq!(trailing.name, "show_results");
        assert!(trailing.params.is_empty());

        let empty: OrderSpec = "".parse().unwrap();
        assert!(empty.name.is_empty());
    }

    #[test]
    fn test_order_spec_display() {
        let spec: OrderSpec = "reverse:a,b".parse().unwrap();
        assert_eq!(spec.to_string(), "reverse:a,b");
        let spec: OrderSpec = "ping".parse().unwrap();
        assert_eq!(spec.to_string(), "ping");
    }
}
