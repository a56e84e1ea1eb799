//! Redis connection configuration.
//!
//! One shared connection schema for every Redis-backed component. The
//! `pool` and `sentinel` sub-sections are optional composites: an absent
//! section means the whole group is unset, while a present-but-partial
//! section fills the rest of that group with defaults.

use serde::{Deserialize, Serialize};

/// Redis connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Database index used by the connection factory.
    #[serde(default)]
    pub database: i32,
    /// Redis server host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Login password of the Redis server. Has no default and must be
    /// supplied by deployments that activate a Redis backend.
    #[serde(default)]
    pub password: Option<String>,
    /// Redis server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Connection timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_millis: u64,
    /// Connection pool tuning.
    #[serde(default)]
    pub pool: Option<RedisPoolConfig>,
    /// Redis Sentinel topology.
    #[serde(default)]
    pub sentinel: Option<RedisSentinelConfig>,
    /// Whether to activate the pool configuration.
    #[serde(default = "default_true")]
    pub use_pool: bool,
    /// Whether to use SSL for the connection factory.
    #[serde(default)]
    pub use_ssl: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            database: 0,
            host: default_host(),
            password: None,
            port: default_port(),
            timeout_millis: default_timeout(),
            pool: None,
            sentinel: None,
            use_pool: true,
            use_ssl: false,
        }
    }
}

/// Connection pool tuning.
///
/// Negative values are sentinels with defined meaning (unlimited, block
/// indefinitely) and are handed to the pool exactly as supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisPoolConfig {
    /// Number of idle objects examined per eviction run. A negative value
    /// `-n` tests roughly one nth of the idle objects per run.
    #[serde(default)]
    pub num_tests_per_eviction_run: i32,
    /// Minimum idle time in milliseconds before eviction, honored only
    /// while at least `min_idle` instances remain in the pool. Ignored
    /// when `min_evictable_idle_time_millis` is positive.
    #[serde(default)]
    pub soft_min_evictable_idle_time_millis: i64,
    /// Minimum idle time in milliseconds before an object may be evicted.
    /// Non-positive disables eviction on idle time alone.
    #[serde(default)]
    pub min_evictable_idle_time_millis: i64,
    /// Return idle objects in LIFO order; `false` means FIFO.
    #[serde(default = "default_true")]
    pub lifo: bool,
    /// Serve threads waiting to borrow in FIFO order.
    #[serde(default)]
    pub fairness: bool,
    /// Validate objects when they are created for the pool.
    #[serde(default)]
    pub test_on_create: bool,
    /// Validate objects when borrowed from the pool.
    #[serde(default)]
    pub test_on_borrow: bool,
    /// Validate objects when returned to the pool.
    #[serde(default)]
    pub test_on_return: bool,
    /// Validate idle objects during eviction runs.
    #[serde(default)]
    pub test_while_idle: bool,
    /// Maximum number of idle connections. Negative = unlimited.
    #[serde(default = "default_max_idle")]
    pub max_idle: i32,
    /// Minimum number of idle connections to maintain. Only positive
    /// values take effect.
    #[serde(default)]
    pub min_idle: i32,
    /// Maximum number of connections allocated at a given time.
    /// Negative = no limit.
    #[serde(default = "default_max_active")]
    pub max_active: i32,
    /// Maximum time in milliseconds a borrow may block when the pool is
    /// exhausted. Negative = block indefinitely.
    #[serde(default = "default_max_wait")]
    pub max_wait_millis: i64,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            num_tests_per_eviction_run: 0,
            soft_min_evictable_idle_time_millis: 0,
            min_evictable_idle_time_millis: 0,
            lifo: true,
            fairness: false,
            test_on_create: false,
            test_on_borrow: false,
            test_on_return: false,
            test_while_idle: false,
            max_idle: default_max_idle(),
            min_idle: 0,
            max_active: default_max_active(),
            max_wait_millis: default_max_wait(),
        }
    }
}

/// Redis Sentinel topology.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedisSentinelConfig {
    /// Name of the monitored primary.
    #[serde(default)]
    pub master: Option<String>,
    /// Sentinel endpoints as `host:port` pairs, in the order they are
    /// consulted for failover discovery.
    #[serde(default)]
    pub nodes: Vec<String>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6379
}

fn default_timeout() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

fn default_max_idle() -> i32 {
    8
}

fn default_max_active() -> i32 {
    8
}

fn default_max_wait() -> i64 {
    -1
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> RedisConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_connection_defaults() {
        let redis = RedisConfig::default();
        assert_eq!(redis.database, 0);
        assert_eq!(redis.host, "localhost");
        assert_eq!(redis.password, None);
        assert_eq!(redis.port, 6379);
        assert_eq!(redis.timeout_millis, 2000);
        assert!(redis.pool.is_none());
        assert!(redis.sentinel.is_none());
        assert!(redis.use_pool);
        assert!(!redis.use_ssl);
    }

    #[test]
    fn test_pool_defaults() {
        let pool = RedisPoolConfig::default();
        assert_eq!(pool.max_idle, 8);
        assert_eq!(pool.min_idle, 0);
        assert_eq!(pool.max_active, 8);
        assert_eq!(pool.max_wait_millis, -1);
        assert!(pool.lifo);
        assert!(!pool.fairness);
        assert!(!pool.test_on_create);
        assert!(!pool.test_on_borrow);
        assert!(!pool.test_on_return);
        assert!(!pool.test_while_idle);
        assert_eq!(pool.num_tests_per_eviction_run, 0);
        assert_eq!(pool.min_evictable_idle_time_millis, 0);
        assert_eq!(pool.soft_min_evictable_idle_time_millis, 0);
    }

    #[test]
    fn test_negative_pool_sentinels_are_preserved() {
        let redis = parse(
            r#"
            [pool]
            max_wait_millis = -250
            max_idle = -1
            num_tests_per_eviction_run = -3
            "#,
        );
        let pool = redis.pool.unwrap();
        assert_eq!(pool.max_wait_millis, -250);
        assert_eq!(pool.max_idle, -1);
        assert_eq!(pool.num_tests_per_eviction_run, -3);
    }

    #[test]
    fn test_sentinel_nodes_preserve_order_and_duplicates() {
        let redis = parse(
            r#"
            [sentinel]
            master = "mymaster"
            nodes = ["s1:26379", "s2:26379", "s1:26379"]
            "#,
        );
        let sentinel = redis.sentinel.unwrap();
        assert_eq!(sentinel.master.as_deref(), Some("mymaster"));
        assert_eq!(sentinel.nodes, vec!["s1:26379", "s2:26379", "s1:26379"]);
    }
}
