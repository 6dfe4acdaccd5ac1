/*!
# Bounded Frontiers

Fixed-capacity containers used as traversal scratch space: a LIFO [`BoundedStack`] and a
circular FIFO [`BoundedQueue`]. Both are backed by a single preallocated buffer that is
never resized; running out of space is reported as an error value and leaves the
container unchanged.

Both also record a high-water mark so that callers (and tests) can check that the capacity
they chose is a real bound.
*/

use crate::*;

/// Abstraction for the traversal frontier data structure.
///
/// The container determines the traversal order:
/// - [`BoundedQueue`] -> queue semantics -> **BFS**
/// - [`BoundedStack`] -> stack semantics -> **DFS**
pub trait Frontier: Sized {
    /// Creates an empty frontier that can hold `capacity` nodes
    fn with_capacity(capacity: usize) -> Self;

    /// Inserts a node. Fails without modifying the frontier if it is full.
    fn insert(&mut self, u: Node) -> Result<()>;

    /// Removes and returns the next node. Fails if the frontier is empty.
    fn remove(&mut self) -> Result<Node>;

    /// Returns the next node without removing it
    fn peek(&self) -> Option<Node>;

    /// Returns the number of nodes currently held
    fn len(&self) -> usize;

    /// Returns the maximum number of nodes that can be held
    fn capacity(&self) -> usize;

    /// Returns the largest number of nodes held at any point so far
    fn high_water_mark(&self) -> usize;

    /// Returns *true* if no nodes are held
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if no further node can be inserted
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// A LIFO stack with fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedStack {
    data: Box<[Node]>,
    top: usize,
    max_len: usize,
}

impl BoundedStack {
    /// Creates an empty stack that can hold `capacity` nodes
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![INVALID_NODE; capacity].into_boxed_slice(),
            top: 0,
            max_len: 0,
        }
    }

    /// Pushes `u` on top of the stack.
    /// Returns [`GraphError::StackOverflow`] and leaves the stack unchanged if it is full.
    pub fn push(&mut self, u: Node) -> Result<()> {
        if self.top == self.data.len() {
            return Err(GraphError::StackOverflow {
                capacity: self.data.len(),
            });
        }

        self.data[self.top] = u;
        self.top += 1;
        self.max_len = self.max_len.max(self.top);
        Ok(())
    }

    /// Removes and returns the top of the stack.
    /// Returns [`GraphError::StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Node> {
        if self.top == 0 {
            return Err(GraphError::StackUnderflow);
        }

        self.top -= 1;
        Ok(self.data[self.top])
    }
}

impl Frontier for BoundedStack {
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn insert(&mut self, u: Node) -> Result<()> {
        self.push(u)
    }

    fn remove(&mut self) -> Result<Node> {
        self.pop()
    }

    fn peek(&self) -> Option<Node> {
        self.top.checked_sub(1).map(|i| self.data[i])
    }

    fn len(&self) -> usize {
        self.top
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn high_water_mark(&self) -> usize {
        self.max_len
    }
}

/// A FIFO queue with fixed capacity, implemented as a ring buffer
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    data: Box<[Node]>,
    head: usize,
    len: usize,
    max_len: usize,
}

impl BoundedQueue {
    /// Creates an empty queue that can hold `capacity` nodes
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![INVALID_NODE; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
            max_len: 0,
        }
    }

    /// Appends `u` at the rear of the queue.
    /// Returns [`GraphError::QueueFull`] and leaves the queue unchanged if it is full.
    pub fn enqueue(&mut self, u: Node) -> Result<()> {
        let capacity = self.data.len();
        if self.len == capacity {
            return Err(GraphError::QueueFull { capacity });
        }

        let rear = (self.head + self.len) % capacity;
        self.data[rear] = u;
        self.len += 1;
        self.max_len = self.max_len.max(self.len);
        Ok(())
    }

    /// Removes and returns the front of the queue.
    /// Returns [`GraphError::QueueEmpty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<Node> {
        if self.len == 0 {
            return Err(GraphError::QueueEmpty);
        }

        let u = self.data[self.head];
        self.head = (self.head + 1) % self.data.len();
        self.len -= 1;
        Ok(u)
    }
}

impl Frontier for BoundedQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn insert(&mut self, u: Node) -> Result<()> {
        self.enqueue(u)
    }

    fn remove(&mut self) -> Result<Node> {
        self.dequeue()
    }

    fn peek(&self) -> Option<Node> {
        (self.len > 0).then(|| self.data[self.head])
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn high_water_mark(&self) -> usize {
        self.max_len
    }
}
