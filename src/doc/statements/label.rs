/*!
# `LABEL <name>`

## Purpose
Mark a position in the program as a target for `GOTO`.

## Remarks
Each label name may be declared only once; a second declaration is a
`DUPLICATE LABEL` error. Label names do not clash with variable names.

## Example
```text
LABEL top
PRINT "forever"
GOTO top
```

*/
